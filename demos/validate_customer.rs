use fiscale::core::*;
use fiscale::fiscal::*;

fn main() {
    // Single-field validation
    println!("=== Fiscal Identifiers ===\n");

    let fiscal_codes = [
        "RSSMRA80A01H501U",
        "rssmra80a01h501u", // lowercase is normalized
        "RSSMRA80A01H501A", // wrong control character
        "RSSMRA80A01H501",  // too short
        "RSSMRAULALMHRLMD", // omocodic
    ];
    for code in &fiscal_codes {
        match check_fiscal_code(code) {
            Ok(normalized) => println!("  {code} => valid ({normalized})"),
            Err(e) => println!("  {code} => INVALID [{}]: {e}", e.kind),
        }
    }

    let omocodia = ValidationOptions::new().allow_omocodia(true);
    println!(
        "  RSSMRAULALMHRLMD with omocodia allowed => {:?}",
        validate_fiscal_code_with("RSSMRAULALMHRLMD", &omocodia)
    );

    println!();
    for vat in ["12345670785", "123 456 707 85", "12345670786", "IT12345670785"] {
        match check_vat_number(vat) {
            Ok(digits) => println!("  {vat} => valid ({digits})"),
            Err(e) => println!("  {vat} => INVALID [{}]: {e}", e.kind),
        }
    }

    println!();
    for sdi in ["M5UXCR1", SDI_DEFAULT_CODE, "ABCDEF"] {
        println!("  SDI {sdi} => {:?}", validate_sdi_code(sdi));
    }

    // Whole customer record
    println!("\n=== Customer Record ===\n");

    let customers = [
        CustomerBuilder::new("Rossi Mario")
            .fiscal_code("RSSMRA80A01H501U")
            .email("mario.rossi@example.it")
            .phone("+39 333-1234567")
            .build(),
        CustomerBuilder::new("  ")
            .vat_number("12345670786")
            .sdi_code("ABC")
            .email("not-an-email")
            .phone("123")
            .build(),
        CustomerInput::default(),
    ];

    for (i, customer) in customers.iter().enumerate() {
        let errors = validate_customer(customer);
        if errors.is_empty() {
            println!("  customer #{} => valid", i + 1);
            continue;
        }
        println!("  customer #{} => {} error(s)", i + 1, errors.len());
        for (field, message) in &errors {
            println!("    {field}: {message}");
        }
    }
}
