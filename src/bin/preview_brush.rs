//! Brush preview tool — renders one horizontal slice of a brush as text.
//!
//! Usage: cargo run --bin preview_brush -- [OPTIONS]
//!
//! Options:
//!   --brush <NAME>   Brush name (default: "random")
//!   --args <TEXT>    Brush arguments, e.g. "stone/3 glass" (default: none)
//!   --seed <SEED>    Instance seed (default: fresh random seed)
//!   --size <N>       Slice edge length in voxels (default: 48)
//!   --y <Y>          Slice height (default: 0)
//!   --blocks <PATH>  Block table JSON file (default: built-in table)

use glam::IVec3;

use voxbrush::block::{BlockEntry, BlockTable};
use voxbrush::brush::{BrushArgs, BrushRegistry};
use voxbrush::command::{LogMessenger, build_brush};
use voxbrush::draw::CuboidOp;

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .init();

    let argv: Vec<String> = std::env::args().collect();
    let brush_name = parse_str_arg(&argv, "--brush").unwrap_or_else(|| "random".to_string());
    let brush_message = parse_str_arg(&argv, "--args").unwrap_or_default();
    let size = parse_i32_arg(&argv, "--size").unwrap_or(48).max(1);
    let y = parse_i32_arg(&argv, "--y").unwrap_or(0);

    let table = match parse_str_arg(&argv, "--blocks") {
        Some(path) => match BlockTable::from_path(&path) {
            Ok(table) => table,
            Err(err) => {
                eprintln!("failed to load block table {path}: {err}");
                std::process::exit(1);
            }
        },
        None => BlockTable::with_defaults(),
    };
    let held = table.get("stone").unwrap_or(BlockEntry::AIR);

    let mut args = BrushArgs::new(&brush_message, held);
    if let Some(seed) = parse_u32_arg(&argv, "--seed") {
        args.seed = seed;
    }

    let registry = BrushRegistry::with_builtin();
    let Some(brush) = build_brush(&registry, &brush_name, &args, &table, &LogMessenger) else {
        let names: Vec<&str> = registry.names().collect();
        eprintln!("no brush produced; known brushes: {}", names.join(", "));
        std::process::exit(1);
    };

    log::info!("{} brush, seed {}, {}x{} slice at y={}", brush.name(), args.seed, size, size, y);

    let op = CuboidOp::new(IVec3::new(0, y, 0), IVec3::new(size - 1, y, size - 1));
    let mut rows = vec![String::new(); size as usize];
    op.perform(brush.as_ref(), |pos, entry| {
        rows[pos.z as usize].push(glyph(entry));
    });
    for row in rows {
        println!("{row}");
    }
}

/// Stable printable glyph per block id; air renders as '.'
fn glyph(entry: BlockEntry) -> char {
    if entry.is_air() {
        return '.';
    }
    const GLYPHS: &[u8] = b"#@%+*oxsgwld";
    GLYPHS[entry.id as usize % GLYPHS.len()] as char
}

fn parse_str_arg(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == name)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_i32_arg(args: &[String], name: &str) -> Option<i32> {
    parse_str_arg(args, name)?.parse().ok()
}

fn parse_u32_arg(args: &[String], name: &str) -> Option<u32> {
    parse_str_arg(args, name)?.parse().ok()
}
