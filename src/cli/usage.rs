//! Usage and version text

use crate::config::Config;

/// Usage text for `program`
pub fn usage_text(program: &str) -> String {
    format!(
        "Usage: {program} [--file <in>|-] [\"key=value\" | [ \"key2=value2\"]]\n\
         \x20      -h | --help        Print this help\n\
         \x20      -f | --file        Specify the properties file to read\n\
         \x20      -                  Read properties from stdin\n\
         \x20      --version          Print version and runtime info\n"
    )
}

/// Version text: name, version, license and the toolchain the binary was built with
pub fn version_text(config: &Config) -> String {
    format!(
        "{} {}\n\
         Copyright (C) 2014 Ben Whitehead\n\
         License: Apache License v2.0\n\
         \n\
         rustc {} ({}/{})\n",
        config.program_name,
        config.version,
        rustc_version_runtime::version(),
        std::env::consts::OS,
        std::env::consts::ARCH,
    )
}
