use argparse::{ArgumentParser, Store, StoreOption, StoreTrue};
use std::path::PathBuf;

pub struct CliArgs {
    pub input: PathBuf,
    pub adif: Option<PathBuf>,
    pub csv: Option<PathBuf>,
    pub wwff: bool,
    pub sota: bool,
    pub log_level: String,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            adif: None,
            csv: None,
            wwff: false,
            sota: false,
            log_level: "essential".into(),
        }
    }
}

pub fn parse_cli() -> CliArgs {
    let mut args = CliArgs::default();
    {
        let mut ap = ArgumentParser::new();
        ap.set_description("FLE shorthand log -> ADIF / SOTA CSV converter");
        ap.refer(&mut args.input)
            .add_argument("input_file", Store, "Input FLE log file")
            .required();
        ap.refer(&mut args.adif)
            .add_option(&["-a", "--adif"], StoreOption, "Write an ADIF file to this path");
        ap.refer(&mut args.csv)
            .add_option(&["-c", "--csv"], StoreOption, "Write a SOTA CSV file to this path");
        ap.refer(&mut args.wwff)
            .add_option(&["--wwff"], StoreTrue, "Include WWFF fields in the ADIF output");
        ap.refer(&mut args.sota)
            .add_option(&["--sota"], StoreTrue, "Include SOTA fields in the ADIF output");
        ap.refer(&mut args.log_level)
            .add_option(&["--log"], Store, "Log level (essential|debug|trace|warn|error)");
        ap.parse_args_or_exit();
    }
    args
}
