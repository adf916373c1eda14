use tokenmeter_core::{ModelProfile, DEFAULT_MODEL, MODELS};

fn format_models(models: &[ModelProfile]) -> String {
    let mut lines = vec![
        format!("{:<22} {:>12} {:>12}", "Model", "Input $/1M", "Output $/1M"),
        "-".repeat(48),
    ];
    for profile in models {
        let marker = if profile.name == DEFAULT_MODEL.key() {
            " (default)"
        } else {
            ""
        };
        lines.push(format!(
            "{:<22} {:>12.2} {:>12.2}{}",
            profile.name, profile.input_price, profile.output_price, marker
        ));
    }
    lines.join("\n")
}

pub fn run() -> anyhow::Result<()> {
    println!("{}", format_models(&MODELS));
    Ok(())
}
