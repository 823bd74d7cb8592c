use imgbridge_bridge::{CLASS_NAME, MENU_PATH};

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("imgbridge {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: imgbridge");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}",
        option_env!("IMGBRIDGE_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!("node_class: {CLASS_NAME}");
    println!("node_menu: {MENU_PATH}");
    println!("endianness: {}", super::envinfo::endianness());
    println!(
        "features: bridge={}, cli=true",
        cfg!(feature = "bridge")
    );

    Ok(SUCCESS)
}
