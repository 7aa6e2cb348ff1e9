use std::path::Path;

pub fn run(config_path: Option<&Path>, n_bytes: usize, format: &str) {
    let (_, service) = super::make_service(config_path);
    let result = match service.get_entropy(n_bytes) {
        Ok(r) => r,
        Err(e) => super::exit_with(&e),
    };

    eprintln!("{} bytes from {} ({})", n_bytes, result.source, result.kind);
    println!("{}", format_bytes(&result.values[..n_bytes], format));
}

/// Render bytes as lowercase hex or space-separated decimal.
fn format_bytes(bytes: &[u8], format: &str) -> String {
    match format {
        "uint8" => bytes
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        _ => bytes.iter().map(|b| format!("{b:02x}")).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hex() {
        assert_eq!(format_bytes(&[0x00, 0x0f, 0xff], "hex"), "000fff");
    }

    #[test]
    fn test_format_uint8() {
        assert_eq!(format_bytes(&[0, 15, 255], "uint8"), "0 15 255");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_bytes(&[], "hex"), "");
        assert_eq!(format_bytes(&[], "uint8"), "");
    }
}
