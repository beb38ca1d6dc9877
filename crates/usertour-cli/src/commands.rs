//! Subcommand implementations.
//!
//! Each command writes its result to stdout and returns the process exit
//! code; logs go to stderr.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use usertour_common::{FieldError, ThemeError};
use usertour_theme::store::{self, ThemeFormat};
use usertour_theme::{
    render_css, resolve, settings_to_json, validate_settings, validate_theme, SurfaceType,
    ThemeReloader, ThemeSettings,
};

const EXTENSIONS: [&str; 4] = ["json", "yaml", "yml", "toml"];

/// Resolve a file argument: an existing path is used as-is, a bare theme
/// name is looked up in the themes directory.
pub fn locate(file: &Path, themes_dir: Option<&Path>) -> Result<PathBuf, ThemeError> {
    if file.exists() || file.extension().is_some() {
        return Ok(file.to_path_buf());
    }
    let dir = match themes_dir {
        Some(dir) => dir.to_path_buf(),
        None => store::default_themes_dir()?,
    };
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(file).with_extension(ext))
        .find(|candidate| candidate.exists())
        .ok_or_else(|| ThemeError::FileNotFound(dir.join(file)))
}

pub fn defaults(format: ThemeFormat) -> Result<ExitCode, ThemeError> {
    print!("{}", ensure_newline(format.render(&ThemeSettings::default())?));
    Ok(ExitCode::SUCCESS)
}

pub fn resolve_file(path: &Path) -> Result<ExitCode, ThemeError> {
    let settings = store::load_settings_from_path(path)?;
    println!("{}", settings_to_json(&resolve(&settings)));
    Ok(ExitCode::SUCCESS)
}

pub fn css(path: &Path, surface: Option<SurfaceType>) -> Result<ExitCode, ThemeError> {
    let settings = store::load_settings_from_path(path)?;
    println!("{}", render_css(&settings, surface));
    Ok(ExitCode::SUCCESS)
}

/// Every validation problem in a file. Full theme documents are checked
/// with their name and variations; bare settings documents on their own.
pub fn check(path: &Path) -> Result<Vec<FieldError>, ThemeError> {
    let result = match store::load_theme_from_path(path) {
        Ok(theme) => validate_theme(&theme),
        Err(ThemeError::Parse(_)) => validate_settings(&store::load_settings_from_path(path)?),
        Err(e) => return Err(e),
    };
    match result {
        Ok(()) => Ok(Vec::new()),
        Err(ThemeError::Validation(errors)) => Ok(errors),
        Err(e) => Err(e),
    }
}

pub fn validate(path: &Path) -> Result<ExitCode, ThemeError> {
    let errors = check(path)?;
    if errors.is_empty() {
        println!("{}: ok", path.display());
        return Ok(ExitCode::SUCCESS);
    }
    for error in &errors {
        println!("{}: {error}", path.display());
    }
    Ok(ExitCode::FAILURE)
}

pub fn variations(path: &Path) -> Result<ExitCode, ThemeError> {
    let theme = store::load_theme_from_path(path)?;
    if theme.variations.is_empty() {
        println!("{} has no variations", theme.name);
    }
    for (index, variation) in theme.variations.iter().enumerate() {
        println!(
            "{index}\t{}\t{}\t{} condition(s)",
            variation.id,
            variation.name,
            variation.conditions.len()
        );
    }
    Ok(ExitCode::SUCCESS)
}

pub async fn watch(path: PathBuf, surface: SurfaceType) -> Result<ExitCode, ThemeError> {
    let (frame, mut rx) = ThemeReloader::new(path).start(surface).await;
    println!("{}\n", frame.css);

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let css = rx.borrow_and_update().css.clone();
                println!("{css}\n");
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn ensure_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}
