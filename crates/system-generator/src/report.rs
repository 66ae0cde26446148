//! Plain-text system summary

use std::fmt::Write;

use accretion::{Body, BodyKind};
use stellar::{LuminosityClass, Star};

use crate::generation::StellarSystem;

const KELVIN_CELSIUS_DIFFERENCE: f64 = 273.0;

/// Stars first, then one line per planet and one per moon
pub fn describe_system(system: &StellarSystem) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "System {} (seed {})", system.id, system.seed);
    for (index, star) in system.stars.iter().enumerate() {
        describe_star(&mut out, index, star);
    }
    let _ = writeln!(out);

    for (number, planet) in system.planets().enumerate() {
        describe_body(&mut out, &format!("{:>2}", number + 1), planet);
        for (moon_number, moon) in planet.moons.iter().enumerate() {
            describe_moon(&mut out, &format!("   {}.{}", number + 1, moon_number + 1), moon);
        }
    }
    out
}

fn describe_star(out: &mut String, index: usize, star: &Star) {
    let role = if index == 0 { "primary" } else { "companion" };
    let _ = write!(
        out,
        "{:<9} {:<6} {:>7.2} M☉ {:>9.3} L☉ {:>7.3} Gyr  ecosphere {:.3} AU",
        role,
        star.classification,
        star.mass_ratio,
        star.luminosity_ratio,
        star.age / 1.0e9,
        star.ecosphere_radius
    );
    if index > 0 {
        let _ = write!(out, "  orbit {:.3} AU", star.orbit_radius);
    }
    if star.luminosity_class == LuminosityClass::MainSequence {
        let remaining = (star.main_sequence_life - star.age) / 1.0e9;
        let _ = write!(out, "  {:.3} Gyr left on main sequence", remaining);
    }
    let _ = writeln!(out);
}

fn describe_body(out: &mut String, label: &str, body: &Body) {
    let properties = &body.properties;
    let _ = write!(
        out,
        "{} {:>8.3} AU  e {:.3}  {:>10.3} M⊕  {:>9.1} km  {:.3} g/cc",
        label,
        body.a,
        body.e,
        body.body_mass().to_earth_masses(),
        properties.radius,
        properties.density
    );
    match body.kind {
        BodyKind::GasGiant => {
            let _ = write!(out, "  gas giant");
        }
        _ => {
            let _ = write!(
                out,
                "  {:.2} g  {:.3} atm  {:.1} °C",
                properties.surface_gravity,
                properties.surface_pressure / 1000.0,
                properties.surface_temperature - KELVIN_CELSIUS_DIFFERENCE
            );
            if properties.greenhouse_effect && properties.surface_pressure > 0.0 {
                let _ = write!(out, "  greenhouse");
            }
        }
    }
    if properties.resonant_period {
        let _ = write!(out, "  resonant spin");
    }
    let _ = writeln!(out);
}

fn describe_moon(out: &mut String, label: &str, moon: &Body) {
    let _ = writeln!(
        out,
        "{} {:>12.0} km  {:>10.4} M⊕  {:>8.1} km  {:.2} g",
        label,
        moon.semi_major_axis().to_km(),
        moon.body_mass().to_earth_masses(),
        moon.properties.radius,
        moon.properties.surface_gravity
    );
}
