use addrbook_core::dto::ContactDto;

/// Renders list entries with their positional handles, e.g. `[0] 0501234567`.
pub fn format_indexed(values: &[String]) -> String {
    if values.is_empty() {
        return "none".to_string();
    }
    values
        .iter()
        .enumerate()
        .map(|(index, value)| format!("[{}] {}", index, value))
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn print_contact(contact: &ContactDto) {
    println!("name: {}", contact.name);
    println!("phones: {}", format_indexed(&contact.phones));
    println!("emails: {}", format_indexed(&contact.emails));
    println!("birthday: {}", contact.birthday.as_deref().unwrap_or("not set"));
}
