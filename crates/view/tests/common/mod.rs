use regex::Regex;

/// Case-insensitive text matcher, as the page queries use them.
pub fn text(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).expect("test pattern should compile")
}

pub fn first_name() -> Regex {
    text("First Name")
}

pub fn last_name() -> Regex {
    text("Last Name")
}

pub fn email() -> Regex {
    text("Email")
}

pub fn message() -> Regex {
    text("Message")
}
