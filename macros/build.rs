fn main() {
    // statements are stripped at expansion time based on this variable
    println!("cargo:rerun-if-env-changed=MINILOG_LEVEL");
}
