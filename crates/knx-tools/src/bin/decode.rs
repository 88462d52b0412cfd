use clap::Parser;
use knx_core::Tpdu;
use knx_tools::{describe, parse_hex};
use std::io;

#[derive(Parser, Debug)]
#[command(name = "knx-tpdu-decode")]
struct Args {
    /// TPDU octets in hex. Raw octets are read from stdin when omitted.
    bytes: Vec<String>,
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let tpdu = if args.bytes.is_empty() {
        knx_stream::read_tpdu(&mut io::stdin().lock())?
    } else {
        let bytes = parse_hex(&args.bytes)?;
        log::debug!("decoding {} octets", bytes.len());
        Tpdu::from_bytes(&bytes)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tpdu)?);
    } else {
        println!("{}", describe(&tpdu));
    }
    Ok(())
}
