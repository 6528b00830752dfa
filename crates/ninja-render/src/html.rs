//! HTML rendering of forms, lists and admin pages.
//!
//! Output is plain server-rendered HTML. The only script is an inline
//! `onsubmit` that disables a form's submit button once it has been pressed.
//! Every piece of item data goes through [`escape`].

use std::fmt::Write as _;

use ninja_core::{EntitySchema, FieldSchema};

use crate::control::Control;
use crate::form::{FormMode, FormState, TOKEN_FIELD};
use crate::list::{Cell, CollectionList, DELETE_PROMPT, EMPTY_MESSAGE};
use crate::media::media_url;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#f8fafc;color:#0f172a}\
main{max-width:64rem;margin:0 auto;padding:2rem}\
a{color:#2563eb}\
table{width:100%;border-collapse:collapse;background:#fff}\
th,td{padding:.75rem 1rem;border-bottom:1px solid #e2e8f0;text-align:left}\
.actions{text-align:right}\
.badge{padding:.2rem .5rem;border-radius:999px;font-size:.75rem}\
.badge.on{background:#ecfdf5;color:#047857}.badge.off{background:#f1f5f9;color:#475569}\
.banner{padding:.75rem 1rem;border-radius:.5rem;margin-bottom:1rem}\
.banner.error{background:#fef2f2;color:#b91c1c}.banner.warning{background:#fffbeb;color:#b45309}\
.field{margin-bottom:1.25rem}.field label{display:block;font-weight:600;margin-bottom:.25rem}\
.field input[type=text],.field input[type=number],.field input[type=url],.field input[type=date],\
.field select,.field textarea{width:100%;padding:.5rem;border:1px solid #cbd5e1;border-radius:.375rem}\
.field .error{color:#b91c1c;font-size:.875rem}.field .help{color:#64748b;font-size:.875rem}\
.required{color:#ef4444;margin-left:.25rem}\
.thumb{width:3rem;height:3rem;object-fit:cover;border-radius:.5rem;background:#f1f5f9}\
.preview{max-width:12rem;margin-top:.5rem;border-radius:.5rem}";

/// Disables every submit button of the form being submitted.
const SUBMIT_ONCE: &str =
    "this.querySelectorAll('button[type=submit]').forEach(function(b){b.disabled=true;b.textContent='Saving...'})";

/// Escape text for use in element content and quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap a body fragment in a complete admin page.
#[must_use]
pub fn page(title: &str, head_extra: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <meta name=\"robots\" content=\"noindex, nofollow\">\n{head_extra}\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<main>\n{body}</main>\n</body>\n</html>\n",
        escape(title)
    )
}

#[derive(Debug, Clone)]
pub struct FormOptions {
    /// URL the form posts to.
    pub action: String,
    pub submit_label: String,
    /// Host for image previews.
    pub media_base: String,
}

impl FormOptions {
    #[must_use]
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            submit_label: "Save Changes".to_string(),
            media_base: String::new(),
        }
    }

    #[must_use]
    pub fn media_base(mut self, media_base: impl Into<String>) -> Self {
        self.media_base = media_base.into();
        self
    }
}

/// Render the edit/create form for the current state.
#[must_use]
pub fn form_html(state: &FormState, options: &FormOptions) -> String {
    let schema = state.schema();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "<form method=\"post\" action=\"{}\" onsubmit=\"{SUBMIT_ONCE}\">",
        escape(&options.action)
    );
    token_input(&mut out, state.token());
    let _ = writeln!(out, "<h2>{} Details</h2>", escape(&schema.name));
    out.push_str("<p class=\"help\">Fill in the information below</p>\n");

    if let Some(banner) = state.banner() {
        let _ = writeln!(out, "<div class=\"banner error\" role=\"alert\">{}</div>", escape(banner));
    }

    for field in &schema.fields {
        field_html(&mut out, field, state.value(&field.name), state.error(&field.name), options);
    }

    out.push_str("<div class=\"actions\">\n");
    let cancel = state.back_url().unwrap_or(state.list_path());
    let _ = writeln!(out, "<a href=\"{}\">Cancel</a>", escape(cancel));
    if state.is_submitting() {
        out.push_str("<button type=\"submit\" disabled>Saving...</button>\n");
    } else {
        let _ = writeln!(out, "<button type=\"submit\">{}</button>", escape(&options.submit_label));
    }
    out.push_str("</div>\n</form>\n");
    out
}

fn token_input(out: &mut String, token: Option<&str>) {
    if let Some(token) = token {
        let _ = writeln!(out, "<input type=\"hidden\" name=\"{TOKEN_FIELD}\" value=\"{}\">", escape(token));
    }
}

fn field_html(out: &mut String, field: &FieldSchema, value: &str, error: Option<&str>, options: &FormOptions) {
    let name = escape(&field.name);
    let id = format!("field-{name}");
    let control = Control::for_field(field);
    let readonly = if field.read_only { " readonly" } else { "" };
    let placeholder = field
        .placeholder
        .as_deref()
        .map(|p| format!(" placeholder=\"{}\"", escape(p)))
        .unwrap_or_default();

    let _ = writeln!(out, "<div class=\"field\">");
    let _ = write!(out, "<label for=\"{id}\">{}", escape(&field.label));
    if field.required {
        out.push_str("<span class=\"required\">*</span>");
    }
    out.push_str("</label>\n");

    match control {
        Control::Checkbox => {
            let checked = if is_checked(value) { " checked" } else { "" };
            if field.read_only {
                let _ = writeln!(
                    out,
                    "<input type=\"hidden\" name=\"{name}\" value=\"{}\">\
                     <input type=\"checkbox\" id=\"{id}\" disabled{checked}>",
                    if checked.is_empty() { "false" } else { "true" }
                );
            } else {
                let _ = writeln!(out, "<input type=\"checkbox\" id=\"{id}\" name=\"{name}\" value=\"on\"{checked}>");
            }
        }
        Control::Select => {
            let disabled = if field.read_only { " disabled" } else { "" };
            let _ = writeln!(out, "<select id=\"{id}\" name=\"{name}\"{disabled}>");
            let _ = writeln!(out, "<option value=\"\">Select {}...</option>", escape(&field.label));
            for option in &field.options {
                let selected = if option.value == value { " selected" } else { "" };
                let _ = writeln!(
                    out,
                    "<option value=\"{}\"{selected}>{}</option>",
                    escape(&option.value),
                    escape(&option.label)
                );
            }
            out.push_str("</select>\n");
            if field.read_only {
                let _ = writeln!(out, "<input type=\"hidden\" name=\"{name}\" value=\"{}\">", escape(value));
            }
        }
        Control::TextArea | Control::RichText | Control::ListEditor => {
            let rows = match control {
                Control::RichText => 12,
                Control::ListEditor => 5,
                _ => 4,
            };
            let class = if control == Control::RichText { " class=\"rich-text\"" } else { "" };
            let _ = writeln!(
                out,
                "<textarea id=\"{id}\" name=\"{name}\" rows=\"{rows}\"{class}{placeholder}{readonly}>{}</textarea>",
                escape(value)
            );
            if control == Control::ListEditor {
                out.push_str("<p class=\"help\">One entry per line, or a JSON array.</p>\n");
            }
        }
        Control::TextBox | Control::NumberBox | Control::DatePicker | Control::UrlBox | Control::ImagePicker => {
            let input_type = control.input_type().unwrap_or("text");
            let step = if control == Control::NumberBox { " step=\"any\"" } else { "" };
            let _ = writeln!(
                out,
                "<input type=\"{input_type}\" id=\"{id}\" name=\"{name}\" value=\"{}\"{step}{placeholder}{readonly}>",
                escape(value)
            );
            if control == Control::ImagePicker && !value.trim().is_empty() {
                let _ = writeln!(
                    out,
                    "<img class=\"preview\" src=\"{}\" alt=\"\">",
                    escape(&media_url(&options.media_base, value))
                );
            }
        }
    }

    if let Some(help) = &field.help_text {
        let _ = writeln!(out, "<p class=\"help\">{}</p>", escape(help));
    }
    if let Some(error) = error {
        let _ = writeln!(out, "<p class=\"error\">{}</p>", escape(error));
    }
    out.push_str("</div>\n");
}

fn is_checked(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "on" | "1" | "yes")
}

#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Reload the page every this many seconds. `0` disables it.
    pub refresh_secs: u64,
    /// Shown above the table, e.g. when the backend was unreachable.
    pub warning: Option<String>,
    /// Hide the New link and label row links `View`. Used for inbox
    /// entities whose items arrive from the public site.
    pub hide_create: bool,
    pub back_href: Option<String>,
}

/// `<meta>` tag that makes the page reload itself periodically.
#[must_use]
pub fn refresh_meta(seconds: u64) -> String {
    if seconds == 0 {
        String::new()
    } else {
        format!("<meta http-equiv=\"refresh\" content=\"{seconds}\">\n")
    }
}

/// Render the table of items with its header and actions.
#[must_use]
pub fn list_html(list: &CollectionList, options: &ListOptions) -> String {
    let schema = list.schema();
    let columns = list.columns();
    let mut out = String::new();

    if let Some(back) = &options.back_href {
        let _ = writeln!(out, "<p><a href=\"{}\">&larr; Back</a></p>", escape(back));
    }

    let title = options.title.as_deref().unwrap_or(&schema.name);
    let _ = writeln!(out, "<header>\n<h1>{}</h1>", escape(title));
    if let Some(description) = &options.description {
        let _ = writeln!(out, "<p class=\"help\">{}</p>", escape(description));
    }
    if !options.hide_create {
        let _ = writeln!(
            out,
            "<p><a class=\"button\" href=\"{}\">New {}</a></p>",
            escape(&list.new_href()),
            escape(&schema.name)
        );
    }
    out.push_str("</header>\n");

    if let Some(warning) = &options.warning {
        let _ = writeln!(out, "<div class=\"banner warning\" role=\"status\">{}</div>", escape(warning));
    }
    if let Some(error) = list.error() {
        let _ = writeln!(out, "<div class=\"banner error\" role=\"alert\">{}</div>", escape(error));
    }

    out.push_str("<table>\n<thead>\n<tr>");
    for field in &columns {
        let _ = write!(out, "<th>{}</th>", escape(&field.label));
    }
    out.push_str("<th class=\"actions\">Actions</th></tr>\n</thead>\n<tbody>\n");

    let rows = list.rows();
    if rows.is_empty() {
        let _ = writeln!(
            out,
            "<tr><td colspan=\"{}\">{EMPTY_MESSAGE}</td></tr>",
            columns.len() + 1
        );
    }
    for row in &rows {
        out.push_str("<tr>");
        for cell in &row.cells {
            out.push_str("<td>");
            cell_html(&mut out, cell);
            out.push_str("</td>");
        }
        out.push_str("<td class=\"actions\">");
        if let Some(id) = &row.id {
            let label = if options.hide_create { "View" } else { "Edit" };
            let _ = write!(out, "<a href=\"{}\">{label}</a>", escape(&list.edit_href(id)));
            let _ = write!(out, " <a href=\"{}\">Delete</a>", escape(&list.delete_href(id)));
        }
        out.push_str("</td></tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

fn cell_html(out: &mut String, cell: &Cell) {
    match cell {
        Cell::Image { src } if src.is_empty() => out.push_str("<div class=\"thumb\"></div>"),
        Cell::Image { src } => {
            let _ = write!(out, "<img class=\"thumb\" src=\"{}\" alt=\"\">", escape(src));
        }
        Cell::Badge { on } => {
            let class = if *on { "on" } else { "off" };
            let _ = write!(out, "<span class=\"badge {class}\">{}</span>", Cell::badge_label(*on));
        }
        Cell::Text { text, title } => {
            let _ = write!(out, "<span title=\"{}\">{}</span>", escape(title), escape(text));
        }
    }
}

/// The confirmation step of a delete. Posting `confirm=yes` deletes.
#[must_use]
pub fn confirm_delete_html(
    schema: &EntitySchema,
    id: &str,
    action: &str,
    cancel_href: &str,
    token: Option<&str>,
) -> String {
    let mut out = format!(
        "<h1>Delete {name}</h1>\n<p>{DELETE_PROMPT}</p>\n<p class=\"help\">{name} #{id}</p>\n\
         <form method=\"post\" action=\"{action}\" onsubmit=\"{SUBMIT_ONCE}\">\n",
        name = escape(&schema.name),
        id = escape(id),
        action = escape(action),
    );
    token_input(&mut out, token);
    let _ = write!(
        out,
        "<input type=\"hidden\" name=\"confirm\" value=\"yes\">\n\
         <a href=\"{}\">Cancel</a>\n<button type=\"submit\">Delete</button>\n</form>\n",
        escape(cancel_href)
    );
    out
}

/// Landing page listing every managed entity.
#[must_use]
pub fn index_html<'a>(schemas: impl IntoIterator<Item = &'a EntitySchema>, base_path: &str) -> String {
    let base = base_path.trim_end_matches('/');
    let mut out = String::from("<h1>Content Management</h1>\n<ul>\n");
    for schema in schemas {
        let _ = writeln!(
            out,
            "<li><a href=\"{}/{}\">{}</a></li>",
            escape(base),
            escape(&schema.resource),
            escape(&schema.name)
        );
    }
    out.push_str("</ul>\n");
    out
}

/// Title of a form page, e.g. `New FAQ` or `Edit FAQ`.
#[must_use]
pub fn form_title(state: &FormState) -> String {
    match state.mode() {
        FormMode::Create => format!("New {}", state.schema().name),
        FormMode::Edit { .. } => format!("Edit {}", state.schema().name),
    }
}
