#[allow(dead_code)]
mod resid {
    respak::include_resid!();
}

use respak::{Domain, LocalizationError};

fn main() -> Result<(), LocalizationError> {
    let mut domain = Domain::with_version_hash(resid::VERSION_HASH);
    respak::load_packed!(domain, "en.pak.json")?;
    respak::load_packed!(domain, "et.pak.json")?;

    let tag = std::env::args().nth(1).unwrap_or_else(|| "en".to_string());
    let language = domain.language(&tag)?;

    println!("{}", language.string(resid::Greeting));
    println!("{}", language.string(resid::Farewell));

    // Untranslated strings resolve to "", fall back to English.
    let heading = match language.string(resid::Languages) {
        "" => domain.resolve("en", resid::Languages),
        text => text,
    };
    println!("{}", heading);
    for language in domain.languages() {
        println!("  {} ({} strings)", language.tag(), language.len());
    }

    Ok(())
}
