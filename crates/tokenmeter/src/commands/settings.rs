use tokenmeter_core::Currency;
use tokenmeter_history::{Paths, Settings, SettingsStore, Theme};

fn format_settings(settings: &Settings) -> String {
    format!(
        "theme:        {}\n\
         currency:     {}\n\
         output ratio: {}%",
        settings.theme, settings.currency, settings.output_ratio
    )
}

/// Overlay the given values onto `settings`
fn apply_changes(
    mut settings: Settings,
    currency: Option<&str>,
    ratio: Option<u8>,
    theme: Option<Theme>,
) -> Settings {
    if let Some(label) = currency {
        let currency = Currency::parse(label);
        if !currency.is_known() {
            tracing::warn!(currency = %currency, "unknown currency, costs will use USD parity");
        }
        settings.currency = currency;
    }
    if let Some(ratio) = ratio {
        settings.output_ratio = ratio.min(100);
    }
    if let Some(theme) = theme {
        settings.theme = theme;
    }
    settings
}

pub fn run_show() -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let settings = SettingsStore::new(&paths).load()?;
    println!("{}", format_settings(&settings));
    Ok(())
}

pub fn run_set(
    currency: Option<&str>,
    ratio: Option<u8>,
    theme: Option<Theme>,
) -> anyhow::Result<()> {
    if currency.is_none() && ratio.is_none() && theme.is_none() {
        anyhow::bail!("nothing to set; pass --currency, --ratio or --theme");
    }

    let paths = Paths::new()?;
    let store = SettingsStore::new(&paths);
    let settings = apply_changes(store.load()?, currency, ratio, theme);
    store.save(&settings)?;
    println!("{}", format_settings(&settings));
    Ok(())
}

pub fn run_reset() -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let settings = Settings::default();
    SettingsStore::new(&paths).save(&settings)?;
    println!("{}", format_settings(&settings));
    Ok(())
}
