use folio_error::NotifyResult;
use folio_models::{domain::prelude::ContactInfo, settings::Settings};
use lettre::{message::header::ContentType, Message};

/// Notification sent to the site owner's mailbox (the SMTP account itself).
/// Reply-To points at the visitor so answering works from any mail client.
pub fn admin_notification(settings: &Settings, contact: &ContactInfo) -> NotifyResult<Message> {
    let mail = &settings.mail;
    let message = Message::builder()
        .from(mail.username.parse()?)
        .reply_to(contact.email.parse()?)
        .to(mail.username.parse()?)
        .subject(format!(
            "🔔 New Contact Form Submission: {}",
            subject_line(contact)
        ))
        .header(ContentType::TEXT_PLAIN)
        .body(format!(
            "You received a new message through the contact form.\n\n\
             Name: {}\n\
             Email: {}\n\
             Subject: {}\n\n\
             Message:\n{}\n",
            contact.name,
            contact.email,
            subject_line(contact),
            contact.message
        ))?;
    Ok(message)
}

/// Confirmation sent back to the visitor, signed with the admin identity.
pub fn auto_reply(settings: &Settings, contact: &ContactInfo) -> NotifyResult<Message> {
    let mail = &settings.mail;
    let admin = &settings.admin;
    let message = Message::builder()
        .from(mail.username.parse()?)
        .to(contact.email.parse()?)
        .subject("✅ Thank you for contacting me!")
        .header(ContentType::TEXT_PLAIN)
        .body(format!(
            "Hi {},\n\n\
             Thank you for reaching out. I received your message about \
             \"{}\" and will get back to you as soon as possible.\n\n\
             Best regards,\n\
             {}\n\
             {}\n",
            contact.name,
            subject_line(contact),
            admin.name,
            admin.email
        ))?;
    Ok(message)
}

fn subject_line(contact: &ContactInfo) -> &str {
    if contact.subject.trim().is_empty() {
        "No Subject"
    } else {
        contact.subject.as_str()
    }
}
