fn main() {
    if let Err(err) = panguin::run() {
        web_sys::console::error_1(&err.to_string().into());
    }
}
