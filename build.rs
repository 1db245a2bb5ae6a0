fn main() {
    // Windows-specific: version resource for the executables
    #[cfg(target_os = "windows")]
    {
        let mut res = winres::WindowsResource::new();
        res.set("ProductName", "Genesis Game Genie Converter");
        res.set("FileDescription", "Game Genie code <-> address/value converter");
        if let Err(e) = res.compile() {
            println!("cargo:warning=Failed to embed Windows resources: {}", e);
        }
    }
}
