use band_gen_core::model::random::RngSource;
use band_gen_core::model::settings::GenerationSettings;
use band_gen_core::Generator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Build a generator from the word banks compiled into the crate.
    // Construction self-checks the banks and the grammar tables.
    let generator = Generator::embedded()?;

    // One-off names straight from the thread RNG
    for i in 0..5 {
        println!("Random name {}: {}", i + 1, band_gen_core::generate_name()?);
    }

    // Settings for a reproducible batch
    let mut settings = GenerationSettings::default();
    settings.set_count(10)?;
    settings.seed = Some(42);

    // Maximum number of words a single name may contain
    settings.set_max_tokens(50)?;

    // Invalid values are rejected and leave the settings untouched
    match settings.set_count(0) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }

    // Same seed, same names
    for (i, name) in generator.generate_batch(&settings)?.iter().enumerate() {
        println!("Seeded name {}: {}", i + 1, name);
    }

    // Inspect the role sequence behind a name
    let mut rng = RngSource::seeded(7);
    let name = generator.generate(&mut rng)?;
    let roles: Vec<String> = name.roles().map(|role| format!("{role:?}")).collect();
    println!("Roles: {}", roles.join(" -> "));

    Ok(())
}
