use std::sync::LazyLock;

use crate::combat_log::TemplateId;
use crate::pulls::Pull;

/// Leading bytes of every accepted import string
pub const HEADER_PREFIX: &str =
    "!nN11VTTXv4NMetKqLhMLGvHPLRkQk2KzL58GGFKqVqS0rqeVt6S05sYhXhQ3qUqVqUqDqUq1UqVSD5Wl(";
/// Filler repeated after the prefix
pub const HEADER_PADDING: &str = "qV";
pub const HEADER_PADDING_REPEAT: usize = 795;

pub const PRESET_WEEK: u32 = 1;
pub const PRESET_VERSION: u32 = 2;
pub const PRESET_NAME: &str = "Imported from WCL";

static HEADER: LazyLock<String> = LazyLock::new(|| {
    let mut header = String::with_capacity(
        HEADER_PREFIX.len() + HEADER_PADDING.len() * HEADER_PADDING_REPEAT + 1,
    );
    header.push_str(HEADER_PREFIX);
    header.push_str(&HEADER_PADDING.repeat(HEADER_PADDING_REPEAT));
    header.push('-');
    header
});

/// The framing literal placed before the preset table
pub fn header() -> &'static str {
    &HEADER
}

/// A route preset ready to be rendered as an import string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdtPreset<'a> {
    pub pulls: &'a [Pull<TemplateId>],
    /// 0 when the dungeon is unknown
    pub dungeon: i64,
    pub week: u32,
    pub version: u32,
    pub name: &'a str,
}

impl<'a> MdtPreset<'a> {
    pub fn new(pulls: &'a [Pull<TemplateId>], dungeon: Option<i64>) -> Self {
        Self {
            pulls,
            dungeon: dungeon.unwrap_or(0),
            week: PRESET_WEEK,
            version: PRESET_VERSION,
            name: PRESET_NAME,
        }
    }

    /// Render the import string. Pulls are keyed 1.. in list order and
    /// members keep their order within each pull.
    pub fn render(&self) -> String {
        let pulls = self
            .pulls
            .iter()
            .enumerate()
            .map(|(i, pull)| render_pull(i + 1, pull))
            .collect::<Vec<_>>()
            .join(",");

        let table = format!(
            concat!(
                "{{\n",
                "  [\"pulls\"] = {{ {pulls} }},\n",
                "  [\"dungeon\"] = {dungeon},\n",
                "  [\"week\"] = {week},\n",
                "  [\"version\"] = {version},\n",
                "  [\"name\"] = \"{name}\"\n",
                "}}\n",
            ),
            pulls = pulls,
            dungeon = self.dungeon,
            week = self.week,
            version = self.version,
            name = self.name,
        );

        let mut out = String::with_capacity(HEADER.len() + table.len());
        out.push_str(header());
        out.push_str(&table);
        out.retain(|c| c != '\n');
        out
    }
}

fn render_pull(index: usize, pull: &Pull<TemplateId>) -> String {
    let npcs = pull
        .iter()
        .map(|id| format!("{{[\"id\"]={id}}}"))
        .collect::<Vec<_>>()
        .join(",");
    format!("[{index}]={{[\"npcs\"]={{ {npcs} }} }}")
}

/// Render resolved pulls and a dungeon ID as an MDT import string
pub fn encode(pulls: &[Pull<TemplateId>], dungeon: Option<i64>) -> String {
    tracing::debug!(pulls = pulls.len(), dungeon, "Generating MDT import string");
    MdtPreset::new(pulls, dungeon).render()
}
