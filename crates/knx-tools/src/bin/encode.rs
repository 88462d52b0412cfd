use clap::Parser;
use knx_core::Tpdu;
use knx_tools::{format_hex, parse_hex, PacketKindArg, ServiceCodeArg};
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(name = "knx-tpdu-encode")]
struct Args {
    #[arg(long, value_enum, default_value = "unnumbered-data")]
    kind: PacketKindArg,
    #[arg(long, default_value_t = 0)]
    seq: u8,
    #[arg(long, default_value_t = 0)]
    control: u8,
    #[arg(long, value_enum, default_value = "group-value-read")]
    service: ServiceCodeArg,
    /// Payload octets in hex. Multi-octet payloads start with the padding octet.
    #[arg(long, num_args = 1..)]
    payload: Vec<String>,
    #[arg(long)]
    json: bool,
    /// Write the raw frame to stdout instead of hex.
    #[arg(long, conflicts_with = "json")]
    raw: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let kind = args.kind.into_packet_kind();
    let tpdu = if kind.is_control() {
        Tpdu::control(kind, args.seq, args.control)
    } else {
        Tpdu::data(
            kind,
            args.seq,
            args.service.into_service_code(),
            parse_hex(&args.payload)?,
        )
    };
    log::debug!("encoding {tpdu:?}");

    if args.raw {
        let mut stdout = io::stdout().lock();
        knx_stream::write_tpdu(&mut stdout, &tpdu)?;
        stdout.flush()?;
    } else if args.json {
        let bytes = format_hex(&tpdu.to_vec());
        let out = serde_json::json!({ "tpdu": &tpdu, "bytes": bytes });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", format_hex(&tpdu.to_vec()));
    }
    Ok(())
}
