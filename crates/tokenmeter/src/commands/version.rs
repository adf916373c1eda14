pub fn run() -> anyhow::Result<()> {
    println!("tokenmeter {}", env!("CARGO_PKG_VERSION"));
    println!("Heuristic token counts and cost estimates for LLM prompts");
    Ok(())
}
