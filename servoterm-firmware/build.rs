//! Build script for servoterm-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates servo.toml at compile time
//! - Generates the startup configuration constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

fn main() {
    setup_linker();
    let config = load_config();
    validate_config(&config);
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ServoFile {
    servo: ServoSection,
    #[serde(rename = "loop")]
    refresh: LoopSection,
    serial: SerialSection,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ServoSection {
    default_width_us: i64,
    width_min_us: i64,
    width_max_us: i64,
    increment_us: i64,
    overhead_us: i64,
}

impl Default for ServoSection {
    fn default() -> Self {
        Self {
            default_width_us: 1500,
            width_min_us: 0,
            width_max_us: 65535,
            increment_us: 50,
            overhead_us: 500,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LoopSection {
    refresh_period_ms: i64,
}

impl Default for LoopSection {
    fn default() -> Self {
        Self {
            refresh_period_ms: 20,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SerialSection {
    baudrate: i64,
}

impl Default for SerialSection {
    fn default() -> Self {
        Self { baudrate: 9600 }
    }
}

/// Read and parse servo.toml
fn load_config() -> ServoFile {
    println!("cargo:rerun-if-changed=servo.toml");

    let config_path = Path::new("servo.toml");

    if !config_path.exists() {
        println!("cargo:warning=servo.toml not found, using built-in defaults");
        return ServoFile::default();
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read servo.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid servo.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check ranges and cross-field constraints
fn validate_config(config: &ServoFile) {
    let mut errors = Vec::new();
    let servo = &config.servo;

    let widths = [
        ("default_width_us", servo.default_width_us),
        ("width_min_us", servo.width_min_us),
        ("width_max_us", servo.width_max_us),
        ("increment_us", servo.increment_us),
        ("overhead_us", servo.overhead_us),
    ];
    for (key, value) in widths {
        if !(0..=i64::from(u16::MAX)).contains(&value) {
            errors.push(format!("[servo] {} must be 0-65535", key));
        }
    }

    if servo.width_min_us > servo.width_max_us {
        errors.push("[servo] width_min_us must not exceed width_max_us".to_string());
    } else if servo.default_width_us < servo.width_min_us
        || servo.default_width_us > servo.width_max_us
    {
        errors.push("[servo] default_width_us must lie within [min, max]".to_string());
    }

    if servo.increment_us == 0 {
        errors.push("[servo] increment_us must be at least 1".to_string());
    }

    if !(1..=i64::from(u32::MAX)).contains(&config.refresh.refresh_period_ms) {
        errors.push("[loop] refresh_period_ms must be at least 1".to_string());
    }

    if !(300..=921_600).contains(&config.serial.baudrate) {
        errors.push("[serial] baudrate must be 300-921600".to_string());
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in servo.toml                      ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=servo.toml validated successfully");
}

/// Write the validated values as Rust constants
fn generate_config(config: &ServoFile) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let servo = &config.servo;

    let source = format!(
        "/// Servo startup values from servo.toml\n\
         pub const SERVO: ServoConfig = ServoConfig {{\n    \
             default_width_us: {},\n    \
             width_min_us: {},\n    \
             width_max_us: {},\n    \
             increment_us: {},\n    \
             overhead_us: {},\n\
         }};\n\
         \n\
         /// Refresh timing from servo.toml\n\
         pub const LOOP: LoopConfig = LoopConfig {{\n    \
             refresh_period_ms: {},\n\
         }};\n\
         \n\
         /// Serial link baud rate from servo.toml\n\
         pub const BAUDRATE: u32 = {};\n",
        servo.default_width_us,
        servo.width_min_us,
        servo.width_max_us,
        servo.increment_us,
        servo.overhead_us,
        config.refresh.refresh_period_ms,
        config.serial.baudrate,
    );

    fs::write(out_dir.join("servo_config.rs"), source).unwrap();
}
