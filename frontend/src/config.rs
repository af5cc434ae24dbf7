#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Backend started with the default BIND_ADDRESS
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin behind the reverse proxy
}

pub fn contact_url() -> String {
    format!("{}/api/contact", get_backend_url())
}

pub fn contact_options_url() -> String {
    format!("{}/api/contact/options", get_backend_url())
}
