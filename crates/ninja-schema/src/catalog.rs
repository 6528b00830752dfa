//! Built-in entity definitions for every collection the admin manages.

use ninja_core::{EntitySchema, FieldSchema};
use serde_json::Value;

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
const PHONE_PATTERN: &str = r"^\+?[0-9 ()-]{3,20}$";
const YEAR_PATTERN: &str = r"^[0-9]{4}$";
const INSTAGRAM_PATTERN: &str = r"^https://(www\.)?instagram\.com/";

pub fn all() -> Vec<EntitySchema> {
    vec![
        contact_info(),
        facility_item(),
        faq(),
        gallery_item(),
        group_benefit(),
        group_package(),
        guideline_category(),
        instagram_reel(),
        legal_document(),
        menu_section(),
        pricing_plan(),
        social_link(),
        stat_card(),
        timeline_item(),
        value_item(),
        banner(),
        activity(),
        page(),
        page_section(),
        party_package(),
        contact_message(),
    ]
}

fn text_default(value: &str) -> Value {
    Value::String(value.to_string())
}

fn contact_info() -> EntitySchema {
    EntitySchema::new("contact_info", "Contact Info", "contact-info")
        .field(FieldSchema::text("phone", "Phone").required().pattern(PHONE_PATTERN))
        .field(FieldSchema::text("email", "Email").pattern(EMAIL_PATTERN))
        .field(FieldSchema::textarea("address", "Address"))
        .field(FieldSchema::text("hours", "Opening Hours").placeholder("Mon-Sun 10am-9pm"))
        .field(FieldSchema::url("map_url", "Map Link"))
        .field(FieldSchema::active())
        .field(FieldSchema::order())
        .columns(&["phone", "email", "address", "active"])
}

fn facility_item() -> EntitySchema {
    EntitySchema::new("facility_item", "Facility Item", "facility-items")
        .field(FieldSchema::text("title", "Title").required())
        .field(FieldSchema::textarea("description", "Description").required())
        .field(FieldSchema::text("icon", "Icon Name").required())
        .field(FieldSchema::image("image_url", "Image URL"))
        .field(FieldSchema::json_list("items", "Features"))
        .field(FieldSchema::active())
        .field(FieldSchema::order())
}

fn faq() -> EntitySchema {
    EntitySchema::new("faq", "FAQ", "faqs")
        .field(FieldSchema::text("question", "Question").required().max_length(255))
        .field(FieldSchema::textarea("answer", "Answer").required())
        .field(FieldSchema::text("category", "Category"))
        .field(FieldSchema::active())
        .field(FieldSchema::order())
}

fn gallery_item() -> EntitySchema {
    EntitySchema::new("gallery_item", "Gallery Item", "gallery")
        .field(FieldSchema::text("title", "Title"))
        .field(FieldSchema::image("image_url", "Image URL").required())
        .field(FieldSchema::text("category", "Category"))
        .field(FieldSchema::active())
        .field(FieldSchema::order())
        .columns(&["image_url", "title", "category", "active", "order"])
}

fn group_benefit() -> EntitySchema {
    EntitySchema::new("group_benefit", "Group Benefit", "group-benefits")
        .field(FieldSchema::text("title", "Benefit Title").required())
        .field(FieldSchema::textarea("description", "Description").required())
        .field(FieldSchema::text("icon", "Icon Name (Lucide)").required())
        .field(FieldSchema::order())
        .field(FieldSchema::active())
}

fn group_package() -> EntitySchema {
    EntitySchema::new("group_package", "Group Package", "group-packages")
        .field(FieldSchema::text("name", "Package Name").required())
        .field(FieldSchema::textarea("subtitle", "Subtitle").required())
        .field(FieldSchema::text("min_size", "Min Group Size").required())
        .field(FieldSchema::text("icon", "Icon Name").required())
        .field(FieldSchema::number("price", "Price").required().range(Some(0.0), None))
        .field(FieldSchema::text("price_note", "Price Note").required())
        .field(FieldSchema::json_list("features", "Features"))
        .field(FieldSchema::text("color", "Color").default_value(text_default("primary")))
        .field(FieldSchema::boolean("popular", "Popular").default_value(Value::Bool(false)))
        .field(FieldSchema::active())
        .field(FieldSchema::order())
        .columns(&["name", "min_size", "price", "popular", "active"])
}

fn guideline_category() -> EntitySchema {
    EntitySchema::new("guideline_category", "Guideline Category", "guideline-categories")
        .field(FieldSchema::text("title", "Title").required())
        .field(FieldSchema::text("icon", "Icon Name").required())
        .field(FieldSchema::json_list("items", "Guidelines"))
        .field(FieldSchema::active())
        .field(FieldSchema::order())
}

fn instagram_reel() -> EntitySchema {
    EntitySchema::new("instagram_reel", "Instagram Reel", "instagram-reels")
        .field(FieldSchema::text("title", "Title").required())
        .field(
            FieldSchema::url("reel_url", "Reel URL")
                .required()
                .pattern(INSTAGRAM_PATTERN),
        )
        .field(FieldSchema::image("thumbnail_url", "Thumbnail"))
        .field(FieldSchema::active())
        .field(FieldSchema::order())
}

fn legal_document() -> EntitySchema {
    EntitySchema::new("legal_document", "Legal Document", "legal-documents")
        .field(
            FieldSchema::select("document_type", "Type")
                .required()
                .option("TERMS", "Terms & Conditions")
                .option("DETAILED_RULES", "Detailed Rules")
                .option("WAIVER", "Participant Waiver")
                .option("PRIVACY", "Privacy Policy")
                .option("WAIVER_TERMS", "Waiver Terms"),
        )
        .field(FieldSchema::text("title", "Title").required())
        .field(FieldSchema::rich_text("intro", "Document Content").help("Full text of the document"))
        .field(FieldSchema::json_list("sections", "Sections (JSON)"))
        .field(FieldSchema::date("effective_date", "Effective Date"))
        .field(FieldSchema::active())
}

fn menu_section() -> EntitySchema {
    EntitySchema::new("menu_section", "Menu Section", "menu-sections")
        .field(FieldSchema::text("category", "Category Name").required())
        .field(FieldSchema::json_list("items", "Menu Items"))
        .field(FieldSchema::text("icon", "Icon Name"))
        .field(FieldSchema::text("color", "Color").default_value(text_default("secondary")))
        .field(FieldSchema::active())
        .field(FieldSchema::order())
}

fn pricing_plan() -> EntitySchema {
    EntitySchema::new("pricing_plan", "Pricing Plan", "pricing-plans")
        .field(FieldSchema::text("name", "Plan Name").required())
        .field(
            FieldSchema::select("type", "Type")
                .required()
                .option("SESSION", "Session")
                .option("PARTY", "Party"),
        )
        .field(FieldSchema::text("age_group", "Age Group"))
        .field(FieldSchema::number("price", "Price").required().range(Some(0.0), None))
        .field(
            FieldSchema::number("duration", "Duration (mins)")
                .required()
                .range(Some(1.0), Some(1440.0)),
        )
        .field(FieldSchema::text("period_text", "Period Text").default_value(text_default("/ 60 Mins")))
        .field(FieldSchema::textarea("description", "Description"))
        .field(FieldSchema::json_list("features", "Features"))
        .field(FieldSchema::boolean("popular", "Popular").default_value(Value::Bool(false)))
        .field(FieldSchema::text("variant", "Variant").default_value(text_default("primary")))
        .field(FieldSchema::active())
        .field(FieldSchema::order())
        .columns(&["name", "type", "price", "duration", "active"])
}

fn social_link() -> EntitySchema {
    EntitySchema::new("social_link", "Social Link", "social-links")
        .field(FieldSchema::text("platform", "Platform Name").required())
        .field(FieldSchema::url("url", "Profile URL").required())
        .field(FieldSchema::text("icon", "Icon Name (Lucide)"))
        .field(FieldSchema::active())
        .field(FieldSchema::order())
}

fn stat_card() -> EntitySchema {
    EntitySchema::new("stat_card", "Stat Card", "stat-cards")
        .field(FieldSchema::text("label", "Label").required().help("e.g., 'Happy Jumpers'"))
        .field(FieldSchema::text("value", "Value").required().help("e.g., '5,000+'"))
        .field(FieldSchema::text("unit", "Unit").required())
        .field(FieldSchema::text("icon", "Icon Name").required())
        .field(FieldSchema::text("color", "Color").default_value(text_default("primary")))
        .field(FieldSchema::text("page", "Page").default_value(text_default("home")))
        .field(FieldSchema::active())
        .field(FieldSchema::order())
}

fn timeline_item() -> EntitySchema {
    EntitySchema::new("timeline_item", "Timeline Item", "timeline-items")
        .field(FieldSchema::text("year", "Year").required().pattern(YEAR_PATTERN))
        .field(FieldSchema::text("title", "Title").required())
        .field(FieldSchema::textarea("description", "Description").required())
        .field(FieldSchema::active())
        .field(FieldSchema::order())
}

fn value_item() -> EntitySchema {
    EntitySchema::new("value_item", "Value Item", "value-items")
        .field(FieldSchema::text("title", "Title").required())
        .field(FieldSchema::textarea("description", "Description").required())
        .field(FieldSchema::text("icon", "Icon Name").required())
        .field(FieldSchema::text("color", "Color").default_value(text_default("primary")))
        .field(FieldSchema::active())
        .field(FieldSchema::order())
}

fn banner() -> EntitySchema {
    EntitySchema::new("banner", "Banner", "banners")
        .field(FieldSchema::text("title", "Title").required())
        .field(FieldSchema::image("image_url", "Image URL").required())
        .field(FieldSchema::url("link", "Link URL"))
        .field(FieldSchema::active())
        .field(FieldSchema::order())
}

fn activity() -> EntitySchema {
    EntitySchema::new("activity", "Activity", "activities")
        .field(FieldSchema::text("name", "Activity Name").required())
        .field(FieldSchema::text("slug", "Slug (URL)").help("Leave empty to auto-generate"))
        .field(FieldSchema::textarea("short_description", "Short Summary"))
        .field(FieldSchema::rich_text("description", "Full Description").required())
        .field(FieldSchema::image("image_url", "Main Image").required())
        .field(FieldSchema::json_list("gallery", "Image Gallery"))
        .field(FieldSchema::active())
        .field(FieldSchema::order())
}

fn page() -> EntitySchema {
    EntitySchema::new("page", "Page", "pages")
        .field(FieldSchema::text("slug", "Slug").required())
        .field(FieldSchema::text("title", "SEO Title").required().max_length(70))
        .field(FieldSchema::textarea("description", "SEO Description").max_length(160))
        .field(FieldSchema::textarea("keywords", "SEO Keywords"))
        .field(FieldSchema::active())
}

fn page_section() -> EntitySchema {
    EntitySchema::new("page_section", "Page Section", "page-sections")
        .field(FieldSchema::text("page", "Page ID").required())
        .field(FieldSchema::text("section_key", "Section Key").required())
        .field(FieldSchema::text("title", "Title"))
        .field(FieldSchema::textarea("subtitle", "Subtitle"))
        .field(FieldSchema::textarea("content", "Content"))
        .field(FieldSchema::image("image_url", "Image URL"))
        .field(FieldSchema::url("video_url", "Video URL"))
        .field(FieldSchema::text("cta_text", "CTA Text"))
        .field(FieldSchema::text("cta_link", "CTA Link"))
        .field(FieldSchema::active())
        .field(FieldSchema::order())
}

fn party_package() -> EntitySchema {
    EntitySchema::new("party_package", "Party Package", "party-packages")
        .field(FieldSchema::text("name", "Package Name").required())
        .field(FieldSchema::textarea("description", "Description").required())
        .field(FieldSchema::number("price", "Price").required().range(Some(0.0), None))
        .field(
            FieldSchema::number("min_participants", "Min Participants")
                .required()
                .range(Some(1.0), None),
        )
        .field(FieldSchema::number("max_participants", "Max Participants").range(Some(1.0), None))
        .field(FieldSchema::number("duration", "Duration (mins)").required())
        .field(FieldSchema::json_list("includes", "Includes"))
        .field(FieldSchema::json_list("addons", "Add-ons"))
        .field(FieldSchema::image("image_url", "Image URL"))
        .field(FieldSchema::boolean("popular", "Popular").default_value(Value::Bool(false)))
        .field(FieldSchema::text("variant", "Variant").default_value(text_default("accent")))
        .field(FieldSchema::active())
        .field(FieldSchema::order())
        .columns(&["name", "price", "min_participants", "duration", "active"])
}

fn contact_message() -> EntitySchema {
    EntitySchema::new("contact_message", "Contact Message", "contact-messages")
        .field(FieldSchema::text("name", "Name").required().read_only())
        .field(FieldSchema::text("email", "Email").required().read_only())
        .field(FieldSchema::text("phone", "Phone").read_only())
        .field(FieldSchema::textarea("message", "Message").required().read_only())
        .field(FieldSchema::text("created_at", "Submitted On").read_only())
        .field(FieldSchema::boolean("is_read", "Read Status").default_value(Value::Bool(false)))
        .columns(&["name", "email", "created_at", "is_read"])
        .inbox()
}
