pub fn run() -> anyhow::Result<()> {
    println!("tagdive {}", env!("CARGO_PKG_VERSION"));
    println!("Tag summaries and question deep dives from exported support chats");
    Ok(())
}
