//! Static gym information: class booking link and opening hours.

use crate::ui::Style;

const WHATSAPP_NUMBER: &str = "59170707070";

/// Pre-filled message for the booking chat.
pub const BOOKING_MESSAGE: &str =
    "Hi TEMPLO, I'd like to book a class! / ¡Hola TEMPLO, quiero reservar una clase!";

/// Opening hours, both languages.
pub const SCHEDULE_LINES: &[&str] = &[
    "Monday to Saturday / Lunes a Sábado: 6:00 AM - 10:00 PM",
    "Closed Sundays / Cerrado domingos",
    "Power Plate sessions by appointment / Sesiones Power Plate con cita",
];

/// WhatsApp deep link that opens a chat with the booking message filled in.
pub fn booking_url() -> String {
    format!(
        "https://wa.me/{WHATSAPP_NUMBER}?text={}",
        encode_query_value(BOOKING_MESSAGE)
    )
}

// Percent-encodes everything outside the URL-safe set, keeping `'` and `!`
// readable the way messaging apps print them.
fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len() * 3);
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'!' | b'\'' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

pub fn print_booking() {
    println!("{}", Style::header("Book a Class / Reservar una Clase"));
    println!(
        "  {}",
        Style::secondary("Click to book via WhatsApp / Haz clic para reservar por WhatsApp")
    );
    println!("  {}", Style::value(booking_url()));
    println!();
}

pub fn print_schedule() {
    println!("{} 💪", Style::header("TEMPLO Schedule (Horarios TEMPLO)"));
    for line in SCHEDULE_LINES {
        println!("  - {line}");
    }
    println!();
}
