//! The demonstration sequence.
//!
//! Each section writes to the supplied writer so the whole run can be
//! captured. Log entries echoed by the shared [`LoggingService`] go to the
//! process stdout directly, independent of the writer.
//!
//! [`LoggingService`]: menagerie_domain::LoggingService

use std::io::Write;

use anyhow::Context;
use menagerie_domain::{Animal, AnimalSummary, Cat, Dog, Feedable, Movable};

use crate::app::App;

/// Run every section in order.
pub fn run(app: &App, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Menagerie - object model demonstration")?;

    let mut dog = Dog::new("Buddy", "Golden Retriever");
    let mut cat = Cat::new("Mimi", "orange");

    demonstrate_polymorphism(out, &[&dog, &cat])?;
    demonstrate_capabilities(out, &mut cat, &mut dog)?;
    demonstrate_overloading(out, &dog)?;
    demonstrate_injection(app, out)?;
    demonstrate_capability_checks(app, out)?;

    if app.config.summary_json {
        write_summary(out, &[&dog, &cat])?;
    }

    tracing::info!("Demonstration complete");
    Ok(())
}

/// Describe and sound off every animal through the base trait only.
pub fn demonstrate_polymorphism(
    out: &mut impl Write,
    animals: &[&dyn Animal],
) -> anyhow::Result<()> {
    section(out, "Polymorphism")?;
    for animal in animals {
        writeln!(out, "Animal: {}", animal.name())?;
        writeln!(out, "Description: {}", animal.describe())?;
        writeln!(out, "Sound: {}", animal.make_sound())?;
        writeln!(out, "---")?;
    }
    Ok(())
}

/// Exercise both capability traits through trait-object references.
pub fn demonstrate_capabilities(
    out: &mut impl Write,
    movable: &mut dyn Movable,
    feedable: &mut dyn Feedable,
) -> anyhow::Result<()> {
    section(out, "Capabilities")?;

    writeln!(out, "Speed before moving: {:.2}", movable.speed())?;
    movable.move_by(5.0);
    writeln!(out, "Speed after moving: {:.2}", movable.speed())?;

    writeln!(out, "Hungry before feeding: {}", feedable.is_hungry())?;
    feedable.feed("tasty food");
    writeln!(out, "Hungry after feeding: {}", feedable.is_hungry())?;
    Ok(())
}

/// One `play` operation, four call shapes.
pub fn demonstrate_overloading(out: &mut impl Write, dog: &Dog) -> anyhow::Result<()> {
    section(out, "Simulated overloading")?;
    writeln!(out, "{}", dog.play(None, &[]))?;
    writeln!(out, "{}", dog.play(Some("fetch"), &[]))?;
    writeln!(out, "{}", dog.play(Some("tug"), &["ball"]))?;
    writeln!(out, "{}", dog.play(Some("tug"), &["ball", "rope", "frisbee"]))?;
    Ok(())
}

/// Two dogs with different sound services sharing one logger.
pub fn demonstrate_injection(app: &App, out: &mut impl Write) -> anyhow::Result<()> {
    section(out, "Dependency injection")?;

    let services = &app.services;
    let quiet_dog = Dog::new("Shadow", "Husky")
        .with_sound_service(services.quiet_sound.clone())
        .with_logging_service(services.logger());
    let loud_dog = Dog::new("Thunder", "German Shepherd")
        .with_sound_service(services.loud_sound.clone())
        .with_logging_service(services.logger());

    writeln!(out, "Quiet dog: {}", quiet_dog.make_sound())?;
    writeln!(out, "Loud dog: {}", loud_dog.make_sound())?;

    writeln!(out)?;
    writeln!(out, "Action log:")?;
    for entry in services.logging.get_logs() {
        writeln!(out, "  {}", entry)?;
    }
    Ok(())
}

/// Ask fresh animals which capabilities they provide, then show the error a
/// missing capability produces.
pub fn demonstrate_capability_checks(app: &App, out: &mut impl Write) -> anyhow::Result<()> {
    section(out, "Runtime capability checks")?;

    let mut dog = Dog::new("Lucky", "Golden Retriever");
    let cat = Cat::new("Kitty", "orange");

    let roster: [&dyn Animal; 2] = [&dog, &cat];
    for animal in roster {
        writeln!(out, "{} ({}) is an Animal", animal.name(), animal.species())?;
    }

    for capability in &app.config.probed_capabilities {
        writeln!(
            out,
            "{} implements {}: {}",
            dog.species(),
            capability,
            dog.implements(*capability)
        )?;
        writeln!(
            out,
            "{} implements {}: {}",
            cat.species(),
            capability,
            cat.implements(*capability)
        )?;
    }

    match dog.try_move(1.0) {
        Ok(()) => anyhow::bail!("{} unexpectedly moved", dog.name()),
        Err(e) => writeln!(out, "Moving {}: {}", dog.name(), e)?,
    }
    Ok(())
}

pub fn write_summary(out: &mut impl Write, animals: &[&dyn Animal]) -> anyhow::Result<()> {
    section(out, "Roster summary")?;
    let summaries: Vec<AnimalSummary> = animals.iter().map(|a| AnimalSummary::of(*a)).collect();
    let json = serde_json::to_string_pretty(&summaries).context("Failed to serialize roster")?;
    writeln!(out, "{}", json)?;
    Ok(())
}

fn section(out: &mut impl Write, title: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "===== {} =====", title)
}
