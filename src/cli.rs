//! Minimal CLI: load JSON → variant → (probe | describe)
use std::path::PathBuf;
use anyhow::Context;
use clap::{Parser, Subcommand, Args, ValueEnum};

use variant::{numparse, pointer, Variant, WideString};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// load JSON/NDJSON documents as variants and read them back through the loose conversions
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// convert the selected node of each document and print the result
    Probe(ProbeOut),
    /// print tag, size and member keys of the selected node of each document
    Describe(DescribeOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// treat input as newline-delimited JSON (NDJSON)
    #[arg(long, default_value_t = false)]
    ndjson: bool,

    /// JSON Pointer to select a subnode in each document (e.g. /data/items/0/payload)
    #[arg(long)]
    json_pointer: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Target {
    Integer,
    Integer32,
    Unsigned,
    Unsigned32,
    Double,
    Float,
    Boolean,
    String,
    WideString,
}

#[derive(clap::Parser, Debug)]
struct ProbeOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// conversion to apply
    #[arg(long = "as", value_enum)]
    target: Target,

    /// value printed when the node has no reading as the target (parsed like the node text)
    #[arg(long, default_value = "")]
    fallback: String,
}

#[derive(clap::Parser, Debug)]
struct DescribeOut {
    #[command(flatten)]
    input_settings: InputSettings,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_process(&self, mut apply: impl FnMut(&Variant)) -> anyhow::Result<()> {
        if let Some(ptr) = self.json_pointer.as_deref() {
            pointer::parse_pointer(ptr)?;
        }
        let source_paths = resolve_file_path_patterns(&self.input)?;
        for source_path in source_paths {
            log::debug!("loading {}", source_path.display());
            let source = std::fs::read_to_string(&source_path).map_err(|source| variant::Error::Io {
                path: source_path.clone(),
                source,
            })?;
            let documents: Vec<&str> = if self.ndjson {
                source.lines().filter(|line| !line.trim().is_empty()).collect()
            } else {
                vec![source.as_str()]
            };
            for document in documents {
                let value: Variant = variant::path_de::from_str_with_path(document)
                    .with_context(|| format!("failed to parse JSON source file ({})", source_path.display()))?;
                match self.json_pointer.as_deref() {
                    None => apply(&value),
                    Some(ptr) => apply(value.pointer(ptr)),
                }
            }
        }
        Ok(())
    }
}

impl Target {
    fn render(self, node: &Variant, fallback: &str) -> String {
        match self {
            Target::Integer => node.as_integer(numparse::str_to_i64(fallback, 0)).to_string(),
            Target::Integer32 => node.as_integer32(numparse::str_to_i64(fallback, 0) as i32).to_string(),
            Target::Unsigned => node.as_unsigned_integer(numparse::str_to_u64(fallback, 0)).to_string(),
            Target::Unsigned32 => node.as_unsigned_integer32(numparse::str_to_u64(fallback, 0) as u32).to_string(),
            Target::Double => node.as_double(numparse::str_to_f64(fallback, 0.0)).to_string(),
            Target::Float => node.as_float(numparse::str_to_f64(fallback, 0.0) as f32).to_string(),
            Target::Boolean => node.as_boolean(Variant::from(fallback).as_boolean(false)).to_string(),
            Target::String => node.as_string(fallback),
            Target::WideString => node.as_wide_string(&WideString::from(fallback)).to_string(),
        }
    }
}

fn describe(node: &Variant) -> String {
    let mut line = format!("{} size={}", node.variant_type(), node.len());
    if node.is_object() {
        let keys: Vec<&str> = node.iter_object().map(|(k, _)| k.as_str()).collect();
        line.push_str(&format!(" keys=[{}]", keys.join(",")));
    }
    line
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Probe(target) => {
                target.input_settings.load_process(|node| {
                    println!("{}", target.target.render(node, &target.fallback));
                })
            }
            Command::Describe(target) => {
                target.input_settings.load_process(|node| {
                    println!("{}", describe(node));
                })
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn resolve_file_path_patterns<I>(patterns: I) -> variant::Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                matched_any = true;
                out.push(entry?);
            }
            if !matched_any {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                return Err(variant::Error::NoMatches(pattern.to_string()));
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
