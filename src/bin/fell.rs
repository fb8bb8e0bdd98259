//! Tree felling simulator
//!
//! Loads a scene, breaks one block as a player would and reports what the
//! lumberjack did.
//!
//! Usage:
//!     fell [OPTIONS] <SCENE_JSON> <X> <Y> <Z>
//!
//! Options:
//!     -c, --config <FILE>     Lumberjack config JSON (default: built-in defaults)
//!     -t, --tool <ITEM>       Held item id (default: wooden_axe)
//!     --sneak                 Break while sneaking
//!     -h, --help              Show this help message

use std::env;
use std::path::PathBuf;

use glam::IVec3;

use lumberjack::core::logging;
use lumberjack::world::{Player, Scene};
use lumberjack::{FellOutcome, LumberjackConfig, LumberjackPlugin};

fn print_help() {
    eprintln!("fell - Tree felling simulator");
    eprintln!();
    eprintln!("Usage: fell [OPTIONS] <SCENE_JSON> <X> <Y> <Z>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("    -c, --config <FILE>     Lumberjack config JSON (default: built-in defaults)");
    eprintln!("    -t, --tool <ITEM>       Held item id (default: wooden_axe)");
    eprintln!("    --sneak                 Break while sneaking");
    eprintln!("    -h, --help              Show this help message");
    eprintln!();
    eprintln!("Example:");
    eprintln!("    fell scenes/oak.json 0 1 0");
    eprintln!("    RUST_LOG=debug fell -t stick --sneak scenes/oak.json 0 1 0");
}

#[derive(Debug)]
struct Args {
    scene: PathBuf,
    position: IVec3,
    config: Option<PathBuf>,
    tool: String,
    sneak: bool,
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        return Err("Missing scene file".to_string());
    }

    let mut config: Option<PathBuf> = None;
    let mut tool = "wooden_axe".to_string();
    let mut sneak = false;
    let mut positional: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-c" | "--config" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --config".to_string());
                }
                config = Some(PathBuf::from(&args[i]));
            }
            "-t" | "--tool" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --tool".to_string());
                }
                tool = args[i].clone();
            }
            "--sneak" => sneak = true,
            // negative coordinates look like options
            arg if arg.starts_with('-') && arg.parse::<i32>().is_err() => {
                return Err(format!("Unknown option: {}", arg));
            }
            arg => positional.push(arg.to_string()),
        }
        i += 1;
    }

    if positional.len() != 4 {
        return Err(format!(
            "Expected <SCENE_JSON> <X> <Y> <Z>, got {} positional arguments",
            positional.len()
        ));
    }

    let coord = |s: &str| s.parse::<i32>().map_err(|_| format!("Invalid coordinate: {}", s));
    let position = IVec3::new(
        coord(&positional[1])?,
        coord(&positional[2])?,
        coord(&positional[3])?,
    );

    Ok(Args {
        scene: PathBuf::from(&positional[0]),
        position,
        config,
        tool,
        sneak,
    })
}

fn main() {
    logging::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_help();
            std::process::exit(1);
        }
    };

    let config = match &args.config {
        Some(path) => match LumberjackConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: failed to load config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => LumberjackConfig::default(),
    };

    let scene = match Scene::load(&args.scene) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error: failed to load scene {}: {}", args.scene.display(), e);
            std::process::exit(1);
        }
    };

    let mut world = scene.to_world_with_empty_id(&config.materials.empty_prefix);
    let mut player = Player::holding(args.tool.clone());
    player.sneaking = args.sneak;

    let plugin = LumberjackPlugin::new(config);
    plugin.on_server_open();

    println!("Breaking {} at {} with {}", world.block(args.position), args.position, args.tool);
    let outcome = plugin.on_block_destroy(&mut world, &mut player, args.position);
    // the host removes the broken block once the handler returns
    world.remove_block(args.position);

    match outcome {
        FellOutcome::Skipped(reason) => {
            println!("Not felled: {}", reason);
        }
        FellOutcome::Felled { destroyed, wear } => {
            println!("Felled {} blocks", destroyed);
            for (pos, _) in world.destroyed() {
                println!("  {}", pos);
            }
            match wear {
                Some(wear) => println!("Tool wear: {}", wear),
                None => println!("Tool wear: none"),
            }
        }
    }
    println!("Blocks remaining: {}", world.block_count());
}
