//! Basic enum-bridge usage
//!
//! Registers two enumerations at startup, then converts values the way a
//! host ORM does while reading and writing rows. No database is needed.
//!
//! Run with: cargo run --example basic_usage

use std::fmt;

use enum_bridge::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

impl TextEnum for Gender {
    const TYPE_NAME: &'static str = "gender";

    fn variants() -> &'static [Self] {
        &[Gender::Male, Gender::Female]
    }

    fn as_text(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Hand-written constructor for a plain integer scale
fn rating_constructor() -> Constructor {
    Constructor::new(|raw, name, _platform| match raw.parse::<u8>() {
        Ok(stars) if (1..=5).contains(&stars) => Ok(Box::new(stars) as Box<dyn DomainValue>),
        _ => Err(InvalidValueError::new(raw, name).into()),
    })
}

fn main() -> Result<(), EnumBridgeError> {
    println!("🔌 enum-bridge basic usage");

    let bridge = EnumBridge::from_config(&AppConfig::default());
    bridge.register_enum::<Gender>()?;
    bridge
        .registry()
        .register_many(vec![("rating", rating_constructor())])?;

    println!("Registered types: {:?}", bridge.registry().registered_names());

    // Schema
    let sql = bridge.add_column_sql(
        "customers",
        "gender",
        "gender",
        &FieldDeclaration::default().not_null(),
    )?;
    println!("DDL: {}", sql);

    // Writes
    let stored = bridge.encode("gender", Some(&Gender::Female))?;
    println!("Gender::Female is stored as {:?}", stored);

    // Reads
    let gender = bridge.decode_as::<Gender>("gender", stored.as_deref())?;
    println!("{:?} is read back as {:?}", stored, gender);

    let missing = bridge.decode("rating", None)?;
    println!("NULL rating is read back as {:?}", missing);

    match bridge.decode("rating", Some("7")) {
        Ok(value) => println!("Unexpected rating {:?}", value),
        Err(err) => println!("❌ Rejected stored rating: {}", err),
    }

    Ok(())
}
