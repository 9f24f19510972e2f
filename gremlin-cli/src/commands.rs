use eyre::{Result, WrapErr};
use gremlin_translator::{Bytecode, Translator, TranslatorConfig};
use std::{
    fs,
    io::{self, Read},
    path::Path,
};
use tracing::debug;

/// Reads bytecode JSON from `input` (`-` or `None` for stdin).
pub fn read_bytecode(input: Option<&Path>) -> Result<Bytecode> {
    let raw = match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read bytecode from {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .wrap_err("Failed to read bytecode from stdin")?;
            buf
        }
    };
    parse_bytecode(&raw)
}

pub fn parse_bytecode(raw: &str) -> Result<Bytecode> {
    serde_json::from_str(raw).wrap_err("Failed to parse bytecode JSON")
}

pub fn translate(bytecode: &Bytecode, config: TranslatorConfig) -> Result<String> {
    debug!(
        source = %config.source_name,
        sources = bytecode.source_instructions().len(),
        steps = bytecode.step_instructions().len(),
        "translating bytecode"
    );
    let translator = Translator::with_config(config);
    translator
        .translate(bytecode)
        .wrap_err("Failed to translate bytecode")
}
