use crate::domain::model::CustomerInterest;
use chrono::Local;

fn field<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    value.as_deref().filter(|v| !v.trim().is_empty()).unwrap_or(placeholder)
}

/// Plain-text customer interest message for the chat channel. Missing
/// fields render as `N/A`; formatting never fails.
pub fn customer_interest_message(interest: &CustomerInterest) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let customer = &interest.customer;
    let unit = &interest.unit;

    format!(
        r#"🎯 *NEW CUSTOMER INTEREST* 🎯

👤 *Customer Details:*
• Name: {name}
• Phone: {phone}
• Summary: {summary}

🏠 *Unit Information:*
• Unit ID: {unit_id}
• Type: {unit_type}
• Project: {project}
• Price: {price}
• Availability: {availability}

⏰ *Time:* {timestamp}

💼 *Action Required:* Please follow up with the customer within 2 hours!"#,
        name = field(&customer.name, "N/A"),
        phone = field(&customer.phone, "N/A"),
        summary = field(&customer.chat_summary, "N/A"),
        unit_id = field(&unit.unit_id, "N/A"),
        unit_type = field(&unit.unit_type, "N/A"),
        project = field(&unit.project, "N/A"),
        price = field(&unit.price, "N/A"),
        availability = field(&unit.availability, "N/A"),
        timestamp = timestamp,
    )
}
