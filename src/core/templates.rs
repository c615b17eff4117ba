use crate::domain::model::ClientInquiry;
use chrono::Local;

/// Email rendered once per dispatch call: one subject line plus HTML and
/// plain-text alternatives.
#[derive(Debug, Clone)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

fn field<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    value.as_deref().filter(|v| !v.trim().is_empty()).unwrap_or(placeholder)
}

/// Renders the client-inquiry notification. Missing fields fall back to
/// literal placeholders; rendering never fails. When the payload has no
/// inquiry time, the local wall clock is used.
pub fn render_client_inquiry(inquiry: &ClientInquiry) -> RenderedEmail {
    let inquiry_time = inquiry
        .inquiry_time
        .clone()
        .unwrap_or_else(|| Local::now().format("%Y-%m-%d %H:%M:%S").to_string());

    let client_name = field(&inquiry.client_name, "Unknown");
    let project_name = field(&inquiry.unit_details.project_name, "Property");
    let subject = format!("New Client Inquiry - {} - {}", client_name, project_name);

    RenderedEmail {
        subject,
        html: render_html(inquiry, &inquiry_time),
        text: render_text(inquiry, &inquiry_time),
    }
}

fn render_html(inquiry: &ClientInquiry, inquiry_time: &str) -> String {
    let unit = &inquiry.unit_details;

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px; }}
        .header {{ background-color: #2c5aa0; color: white; padding: 20px; text-align: center; border-radius: 8px 8px 0 0; }}
        .content {{ background-color: #f9f9f9; padding: 20px; border: 1px solid #ddd; }}
        .section {{ margin-bottom: 20px; padding: 15px; background-color: white; border-radius: 5px; border-left: 4px solid #2c5aa0; }}
        .section h3 {{ margin-top: 0; color: #2c5aa0; border-bottom: 1px solid #eee; padding-bottom: 5px; }}
        .info-row {{ margin: 8px 0; }}
        .label {{ font-weight: bold; color: #555; display: inline-block; width: 120px; }}
        .value {{ color: #333; }}
        .footer {{ background-color: #f0f0f0; padding: 15px; text-align: center; border-radius: 0 0 8px 8px; font-size: 12px; color: #666; }}
        .urgent {{ background-color: #fff3cd; border-left-color: #ffc107; }}
    </style>
</head>
<body>
    <div class="header">
        <h1>🏠 New Client Inquiry</h1>
        <p>Property Interest Notification</p>
    </div>

    <div class="content">
        <div class="section">
            <h3>👤 Client Information</h3>
            <div class="info-row"><span class="label">Name:</span><span class="value">{client_name}</span></div>
            <div class="info-row"><span class="label">Phone:</span><span class="value">{phone_number}</span></div>
            <div class="info-row"><span class="label">Inquiry Time:</span><span class="value">{inquiry_time}</span></div>
        </div>

        <div class="section">
            <h3>🏢 Unit Details</h3>
            <div class="info-row"><span class="label">Project:</span><span class="value">{project}</span></div>
            <div class="info-row"><span class="label">Unit Type:</span><span class="value">{unit_type}</span></div>
            <div class="info-row"><span class="label">Unit Number:</span><span class="value">{unit_number}</span></div>
            <div class="info-row"><span class="label">Size:</span><span class="value">{size}</span></div>
            <div class="info-row"><span class="label">Price:</span><span class="value">{price}</span></div>
            <div class="info-row"><span class="label">Floor:</span><span class="value">{floor}</span></div>
        </div>

        <div class="section">
            <h3>💬 Chat Description</h3>
            <p style="background-color: #f8f9fa; padding: 10px; border-radius: 4px; margin: 0;">{chat_description}</p>
        </div>

        <div class="section urgent">
            <h3>📋 Client Request/Needs</h3>
            <p style="background-color: #fff; padding: 10px; border-radius: 4px; margin: 0;">{client_request}</p>
        </div>
    </div>

    <div class="footer">
        <p>This is an automated notification from your property inquiry system.</p>
        <p>Please follow up with the client promptly for the best service experience.</p>
    </div>
</body>
</html>
"#,
        client_name = field(&inquiry.client_name, "Not provided"),
        phone_number = field(&inquiry.phone_number, "Not provided"),
        inquiry_time = inquiry_time,
        project = field(&unit.project_name, "Not specified"),
        unit_type = field(&unit.unit_type, "Not specified"),
        unit_number = field(&unit.unit_number, "Not specified"),
        size = field(&unit.size, "Not specified"),
        price = field(&unit.price, "Not specified"),
        floor = field(&unit.floor, "Not specified"),
        chat_description = field(&inquiry.chat_description, "No chat description provided"),
        client_request = field(&inquiry.client_request, "No specific request mentioned"),
    )
}

fn render_text(inquiry: &ClientInquiry, inquiry_time: &str) -> String {
    let unit = &inquiry.unit_details;

    format!(
        r#"NEW CLIENT INQUIRY - PROPERTY INTEREST
=====================================

CLIENT INFORMATION:
------------------
Name: {client_name}
Phone: {phone_number}
Inquiry Time: {inquiry_time}

UNIT DETAILS:
------------
Project: {project}
Unit Type: {unit_type}
Unit Number: {unit_number}
Size: {size}
Price: {price}
Floor: {floor}

CHAT DESCRIPTION:
----------------
{chat_description}

CLIENT REQUEST/NEEDS:
--------------------
{client_request}

=====================================
This is an automated notification from your property inquiry system.
Please follow up with the client promptly for the best service experience.
"#,
        client_name = field(&inquiry.client_name, "Not provided"),
        phone_number = field(&inquiry.phone_number, "Not provided"),
        inquiry_time = inquiry_time,
        project = field(&unit.project_name, "Not specified"),
        unit_type = field(&unit.unit_type, "Not specified"),
        unit_number = field(&unit.unit_number, "Not specified"),
        size = field(&unit.size, "Not specified"),
        price = field(&unit.price, "Not specified"),
        floor = field(&unit.floor, "Not specified"),
        chat_description = field(&inquiry.chat_description, "No chat description provided"),
        client_request = field(&inquiry.client_request, "No specific request mentioned"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::UnitDetails;

    fn sample_inquiry() -> ClientInquiry {
        ClientInquiry {
            client_name: Some("Ahmed Hassan".into()),
            phone_number: Some("+20 12 3456 7890".into()),
            chat_description: Some("Contacted via WhatsApp expressing interest.".into()),
            unit_details: UnitDetails {
                project_name: Some("New Capital Heights".into()),
                unit_type: Some("2-Bedroom Apartment".into()),
                unit_number: Some("A-205".into()),
                size: Some("120 sqm".into()),
                price: Some("2,800,000 EGP".into()),
                floor: Some("2nd Floor".into()),
            },
            inquiry_time: Some("2024-12-15 14:30:00".into()),
            client_request: Some("Interested in flexible payment plan.".into()),
        }
    }

    #[test]
    fn test_subject_interpolates_client_and_project() {
        let rendered = render_client_inquiry(&sample_inquiry());
        assert_eq!(
            rendered.subject,
            "New Client Inquiry - Ahmed Hassan - New Capital Heights"
        );
    }

    #[test]
    fn test_bodies_are_fully_interpolated() {
        let rendered = render_client_inquiry(&sample_inquiry());
        for body in [&rendered.html, &rendered.text] {
            assert!(body.contains("Ahmed Hassan"));
            assert!(body.contains("+20 12 3456 7890"));
            assert!(body.contains("2024-12-15 14:30:00"));
            assert!(body.contains("A-205"));
            assert!(body.contains("2,800,000 EGP"));
        }
    }

    #[test]
    fn test_missing_fields_render_placeholders() {
        let rendered = render_client_inquiry(&ClientInquiry::default());
        assert_eq!(rendered.subject, "New Client Inquiry - Unknown - Property");
        assert!(rendered.text.contains("Name: Not provided"));
        assert!(rendered.text.contains("Project: Not specified"));
        assert!(rendered.text.contains("No chat description provided"));
        assert!(rendered.html.contains("No specific request mentioned"));
    }

    #[test]
    fn test_rendering_is_deterministic_given_a_timestamp() {
        let a = render_client_inquiry(&sample_inquiry());
        let b = render_client_inquiry(&sample_inquiry());
        assert_eq!(a.html, b.html);
        assert_eq!(a.text, b.text);
    }
}
