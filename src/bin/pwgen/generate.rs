use pwgen::Clipboard;

use crate::ProgError;

pub(crate) fn generate_password(
    config: &pwgen::GenerationConfig,
    copy: bool,
) -> Result<(), ProgError> {
    let password = pwgen::password_generation::generate(config, &mut rand::thread_rng());
    println!("{}", password.as_str());
    if copy {
        crate::clipboard::SystemClipboard.write_text(password.as_str())?;
        eprintln!("Copied to the clipboard.");
    }
    Ok(())
}
