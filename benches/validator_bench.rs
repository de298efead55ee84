use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use fiscale::core::*;
use fiscale::fiscal;

fn full_customer() -> CustomerInput {
    CustomerBuilder::new("Rossi Mario")
        .fiscal_code("RSSMRA80A01H501U")
        .vat_number("12345670785")
        .sdi_code("M5UXCR1")
        .email("mario.rossi@example.it")
        .phone("+39 333-1234567")
        .build()
}

fn invalid_customer() -> CustomerInput {
    CustomerBuilder::new(" ")
        .fiscal_code("RSSMRA80A01H501A")
        .vat_number("12345670786")
        .sdi_code("ABC")
        .email("not-an-email")
        .phone("123")
        .build()
}

fn bench_fiscal_code(c: &mut Criterion) {
    c.bench_function("validate_fiscal_code", |b| {
        b.iter(|| black_box(fiscal::validate_fiscal_code(black_box("RSSMRA80A01H501U"))));
    });
}

fn bench_vat_number(c: &mut Criterion) {
    c.bench_function("validate_vat_number", |b| {
        b.iter(|| black_box(fiscal::validate_vat_number(black_box("12345670785"))));
    });
}

fn bench_contact(c: &mut Criterion) {
    c.bench_function("validate_email", |b| {
        b.iter(|| black_box(validate_email(black_box("mario.rossi@example.it"))));
    });
    c.bench_function("validate_phone", |b| {
        b.iter(|| black_box(validate_phone(black_box("+39 (06) 123-4567"))));
    });
}

fn bench_customer(c: &mut Criterion) {
    let valid = full_customer();
    let invalid = invalid_customer();
    c.bench_function("validate_customer_valid", |b| {
        b.iter(|| black_box(validate_customer(black_box(&valid))));
    });
    c.bench_function("validate_customer_all_fields_failing", |b| {
        b.iter(|| black_box(validate_customer(black_box(&invalid))));
    });
}

fn bench_decode(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    c.bench_function("decode_fiscal_code_omocodic", |b| {
        b.iter(|| black_box(fiscal::decode_fiscal_code(black_box("RSSMRAULALMHRLMD"), today)));
    });
}

criterion_group!(
    benches,
    bench_fiscal_code,
    bench_vat_number,
    bench_contact,
    bench_customer,
    bench_decode,
);
criterion_main!(benches);
