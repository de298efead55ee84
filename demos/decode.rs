use chrono::NaiveDate;
use fiscale::fiscal::*;

fn main() {
    let Some(today) = NaiveDate::from_ymd_opt(2024, 6, 15) else {
        return;
    };

    println!("=== Codice Fiscale Decoding (reference date {today}) ===\n");

    let codes = [
        "RSSMRA80A01H501U", // male, Rome
        "BNCLRA85T45F205L", // female, Milan
        "VRDGPP13R10B293P", // born this century
        "MRTMTT25D09F205Z", // born last century
        "RSSMRA80A01Z404R", // foreign born
        "RSSMRAULALMHRLMD", // omocodic
        "RSSMRA80B31H501W", // 31 February
        "RSSMRA80A01HAAAJ", // no cadastral code
    ];

    for code in &codes {
        match decode_fiscal_code(code, today) {
            Ok(data) => println!(
                "  {code} => {} {:?}, born in {}{}",
                data.birth_date,
                data.gender,
                data.birth_place_code,
                if data.is_foreign_born() { " (abroad)" } else { "" }
            ),
            Err(e) => println!("  {code} => ERROR: {e}"),
        }
    }
}
