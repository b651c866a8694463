use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;

use crate::error::{BlendError, Result};
use crate::models::{Berry, BerryFlags, BlendResult, FlavorLevels};

/// Catalog section a TSV row belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Section {
    #[default]
    Standard,
    Event,
    Frontier,
}

/// State threaded through the TSV fold. Rows never mutate it; a section
/// marker row produces a new context for the rows after it.
#[derive(Debug, Clone, Copy, Default)]
struct SectionContext {
    section: Section,
}

impl SectionContext {
    fn enter(self, section: Section) -> Self {
        Self { section }
    }

    fn flags(self) -> BerryFlags {
        BerryFlags {
            event: self.section == Section::Event,
            frontier: self.section == Section::Frontier,
            ..Default::default()
        }
    }
}

/// Load a catalog, choosing the format from the file extension
/// (`.tsv` is tab-separated, anything else is JSON).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Berry>> {
    let path = path.as_ref();
    let is_tsv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));

    if is_tsv {
        load_catalog_tsv(path)
    } else {
        load_catalog_json(path)
    }
}

/// Load berries from a JSON array.
pub fn load_catalog_json<P: AsRef<Path>>(path: P) -> Result<Vec<Berry>> {
    let content = fs::read_to_string(path)?;
    let berries: Vec<Berry> = serde_json::from_str(&content)?;
    Ok(berries)
}

/// Load berries from a tab-separated fixture.
pub fn load_catalog_tsv<P: AsRef<Path>>(path: P) -> Result<Vec<Berry>> {
    let file = fs::File::open(path)?;
    parse_catalog_tsv(file)
}

/// Parse a tab-separated catalog.
///
/// Columns: name, spicy, dry, sweet, bitter, sour, smoothness and an optional
/// comma-separated tag list (`battle-rare`, `damage`, `event`, `frontier`).
/// A row holding only `[standard]`, `[event]` or `[frontier]` switches the
/// section for every row after it.
pub fn parse_catalog_tsv<R: Read>(reader: R) -> Result<Vec<Berry>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let (_, berries) = rdr.records().try_fold(
        (SectionContext::default(), Vec::new()),
        |(ctx, mut berries), record| -> Result<(SectionContext, Vec<Berry>)> {
            let record = record?;
            if let Some(section) = section_marker(&record)? {
                return Ok((ctx.enter(section), berries));
            }
            berries.push(parse_berry_row(&record, ctx)?);
            Ok((ctx, berries))
        },
    )?;

    Ok(berries)
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

fn section_marker(record: &StringRecord) -> Result<Option<Section>> {
    let first = record.get(0).unwrap_or("");
    let rest_empty = record.iter().skip(1).all(str::is_empty);
    let Some(inner) = first
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .filter(|_| rest_empty)
    else {
        return Ok(None);
    };

    match inner.trim().to_lowercase().as_str() {
        "standard" => Ok(Some(Section::Standard)),
        "event" => Ok(Some(Section::Event)),
        "frontier" => Ok(Some(Section::Frontier)),
        other => Err(BlendError::InvalidInput(format!(
            "line {}: unknown section '{}'",
            line_of(record),
            other
        ))),
    }
}

fn field<'a>(record: &'a StringRecord, idx: usize, label: &str) -> Result<&'a str> {
    record.get(idx).filter(|s| !s.is_empty()).ok_or_else(|| {
        BlendError::InvalidInput(format!("line {}: missing {}", line_of(record), label))
    })
}

fn number(record: &StringRecord, idx: usize, label: &str) -> Result<i32> {
    let raw = field(record, idx, label)?;
    raw.parse().map_err(|_| {
        BlendError::InvalidInput(format!(
            "line {}: invalid {} '{}'",
            line_of(record),
            label,
            raw
        ))
    })
}

fn parse_berry_row(record: &StringRecord, ctx: SectionContext) -> Result<Berry> {
    let line = line_of(record);
    let name = field(record, 0, "name")?.to_string();
    let flavors = FlavorLevels {
        spicy: number(record, 1, "spicy")?,
        dry: number(record, 2, "dry")?,
        sweet: number(record, 3, "sweet")?,
        bitter: number(record, 4, "bitter")?,
        sour: number(record, 5, "sour")?,
    };
    let smoothness = u32::try_from(number(record, 6, "smoothness")?).map_err(|_| {
        BlendError::InvalidInput(format!("line {}: negative smoothness", line))
    })?;

    let mut flags = ctx.flags();
    for tag in record.get(7).unwrap_or("").split(',').map(str::trim) {
        match tag {
            "" => {}
            "battle-rare" => flags.battle_rare = true,
            "damage" => flags.damage = true,
            "event" => flags.event = true,
            "frontier" => flags.frontier = true,
            other => {
                return Err(BlendError::InvalidInput(format!(
                    "line {}: unknown tag '{}'",
                    line, other
                )));
            }
        }
    }

    Ok(Berry::new(name, flavors, smoothness).with_flags(flags))
}

#[derive(Debug, Deserialize)]
struct RecipeRow {
    berries: String,
}

/// Load recipe berry lists from a CSV with a `berries` column holding
/// space-separated names.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_path(path)?;
    let mut recipes = Vec::new();
    for row in rdr.deserialize() {
        let row: RecipeRow = row?;
        let names: Vec<String> = row.berries.split_whitespace().map(String::from).collect();
        if !names.is_empty() {
            recipes.push(names);
        }
    }
    Ok(recipes)
}

/// Save blend results as a JSON object keyed by recipe name.
pub fn save_results<P: AsRef<Path>>(path: P, results: &BTreeMap<String, BlendResult>) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    fs::write(path, json)?;
    Ok(())
}
