fn main() {
    if let Err(err) = rbd_layout::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
