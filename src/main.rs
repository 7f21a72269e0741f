use keakit::{gdal, kea_codes, kea_to_gdal, kea_to_numpy, numpy_to_kea, Result, KEA_UNDEFINED};

fn main() -> Result<()> {
    println!("keakit - KEA Data Type Codes\n");

    println!("  KEA  dtype     GDAL");
    println!(
        "  {:>3}  {:<9} {} ({})",
        KEA_UNDEFINED,
        "-",
        gdal::gdal_type_name(kea_to_gdal(KEA_UNDEFINED)?),
        kea_to_gdal(KEA_UNDEFINED)?
    );
    for code in kea_codes() {
        let name = kea_to_numpy(code)?;
        match kea_to_gdal(code) {
            Ok(gdal_code) => println!(
                "  {:>3}  {:<9} {} ({})",
                code,
                name,
                gdal::gdal_type_name(gdal_code),
                gdal_code
            ),
            Err(_) => println!("  {:>3}  {:<9} -", code, name),
        }
    }

    println!("\n--- Translating dtype names ---");
    for name in ["uint8", "uint16", "uin16", "float64"] {
        match numpy_to_kea(name) {
            Ok(code) => println!("  {:<8} -> KEA {}", name, code),
            Err(e) => println!("  {:<8} -> Error: {}", name, e),
        }
    }

    Ok(())
}
