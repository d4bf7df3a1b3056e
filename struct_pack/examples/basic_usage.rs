use struct_pack::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    println!("=== Struct Pack Examples ===\n");

    if let Err(e) = example_one_shot() {
        eprintln!("one-shot example failed: {e}");
    }
    if let Err(e) = example_schema_reuse() {
        eprintln!("schema example failed: {e}");
    }
    example_errors();
}

fn example_one_shot() -> Result<(), PackError> {
    println!("Example 1: one-shot big-endian packing");

    let format = ">BHILQ";
    let bytes = pack(
        format,
        &[
            254u8.into(),
            65534u16.into(),
            4294967294u32.into(),
            4294967294u32.into(),
            18446744073709551614u64.into(),
        ],
    )?;
    println!("  calcsize({format}) = {}", calcsize(format)?);
    println!("  bytes = {}", hex(&bytes));
    println!("  unpacked = {:?}", unpack(format, &bytes)?);
    println!();
    Ok(())
}

fn example_schema_reuse() -> Result<(), PackError> {
    println!("Example 2: compile once, stream many records");

    let schema = Schema::compile("<I8s?")?;
    println!(
        "  {} bytes per record, {} arguments",
        schema.size(),
        schema.arg_count()
    );

    let mut writer = PackWriter::new(&schema, Vec::new());
    for (id, name) in [(1u32, "alpha"), (2, "beta"), (3, "a-very-long-name")] {
        writer.write(&[id.into(), name.into(), (id % 2 == 1).into()])?;
    }
    let bytes = writer.into_inner()?;
    println!("  wrote {} bytes", bytes.len());

    for record in schema.iter_unpack(&bytes)? {
        println!("  {:?}", record?);
    }
    println!();
    Ok(())
}

fn example_errors() {
    println!("Example 3: validation errors");

    for (format, args) in [
        ("Z", vec![]),
        ("!BB", vec![Value::from(0x12u8)]),
        ("!B", vec![Value::from(300u16)]),
        ("!P", vec![]),
    ] {
        match pack(format, &args) {
            Ok(bytes) => println!("  {format}: {}", hex(&bytes)),
            Err(e) => println!("  {format}: {e}"),
        }
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
