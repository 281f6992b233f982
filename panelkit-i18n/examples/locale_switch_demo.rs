//! End-to-end walkthrough of the localization core.
//!
//! Builds an embedded catalog set for three locales, initializes the
//! manager against the environment's languages, renders a few messages
//! through a toy host-side formatter, and switches locales at runtime.
//!
//! Run with: cargo run --example locale_switch_demo

use anyhow::Result;
use panelkit_i18n::{
    system_languages, I18nConfig, LocaleCode, LocaleManager, MemoryPreferenceStore,
    StaticCatalogSource,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    panelkit_common::init_dev_logging()?;

    println!("PanelKit localization demo");
    println!("==========================\n");

    let manager = build_manager().await?;

    show_listing(&manager);
    show_messages(&manager);

    switch_and_show(&manager, "es_ES").await?;
    switch_and_show(&manager, "ar_SA").await?;

    Ok(())
}

async fn build_manager() -> Result<LocaleManager> {
    let en = LocaleCode::parse("en_US")?;
    let es = LocaleCode::parse("es_ES")?;
    let ar = LocaleCode::parse("ar_SA")?;

    // Arabic ships no catalogs yet; every namespace falls back to English.
    let config = I18nConfig::new(
        vec![en.clone(), es.clone(), ar],
        en.clone(),
        vec!["common".to_string(), "servers".to_string()],
    )?;

    let mut source = StaticCatalogSource::new();
    source.insert_json(
        en.clone(),
        "common",
        r#"{"Save": "Save", "Cancel": "Cancel"}"#,
    )?;
    source.insert_json(
        en,
        "servers",
        r#"{"Started": "Server {name} started", "status": {"Online": "Online"}}"#,
    )?;
    source.insert_json(es.clone(), "common", r#"{"Save": "Guardar"}"#)?;
    source.insert_json(
        es,
        "servers",
        r#"{"Started": "Servidor {name} iniciado", "status": {"Online": "En línea"}}"#,
    )?;

    let languages = system_languages();
    println!("Environment languages: {languages:?}\n");

    let manager = LocaleManager::initialize(
        config,
        Arc::new(source),
        Arc::new(MemoryPreferenceStore::new()),
        &languages,
    )
    .await?;
    Ok(manager)
}

fn show_listing(manager: &LocaleManager) {
    println!("Available languages:");
    for entry in manager.locale_listing() {
        println!("  {}  {}", entry.code, entry.label);
    }
    println!();
}

fn show_messages(manager: &LocaleManager) {
    let snapshot = manager.snapshot();
    println!(
        "Active locale: {} (direction {})",
        snapshot.locale, snapshot.direction
    );
    println!("  common.Save           -> {}", manager.message("common", "Save"));
    println!(
        "  servers.status.Online -> {}",
        manager.message("servers", "status.Online")
    );
    // Interpolation belongs to the hosting layer; the manager only hands
    // out the raw template.
    let template = manager.message("servers", "Started");
    println!(
        "  servers.Started       -> {}",
        render(&template, &[("name", "alpha")])
    );
    println!();
}

async fn switch_and_show(manager: &LocaleManager, code: &str) -> Result<()> {
    let target = LocaleCode::parse(code)?;
    let outcome = manager.switch_locale(target).await?;
    println!("Switched to {code}: {outcome:?}");
    show_messages(manager);
    Ok(())
}

/// Minimal `{name}`-style formatter standing in for the host formatter.
fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}
