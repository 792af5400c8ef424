/// Builds a WhatsApp click-to-chat URL. Pure string construction; the
/// host environment is responsible for opening it.
pub fn deep_link(phone_number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{phone_number}?text={}",
        urlencoding::encode(message)
    )
}

/// Booking confirmation message: greeting plus one "Label: value" line
/// per collected detail.
pub fn booking_message(business_name: &str, lines: &[(String, String)]) -> String {
    let mut message = format!("Hello {business_name}! I'd like to confirm my booking:\n");
    for (label, value) in lines {
        message.push_str(&format!("\n{label}: {value}"));
    }
    message
}
