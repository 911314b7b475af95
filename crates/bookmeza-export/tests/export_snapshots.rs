use bookmeza_export::{Delimiter, ExportFormat, ExportOptions, ExportSelection, serialize};
use bookmeza_testing::fixtures::record;
use bookmeza_types::Record;

fn rows() -> Vec<Record> {
    vec![
        record(1)
            .first_name("Ali")
            .last_name("Veli")
            .department("Yazılım")
            .city("Ankara")
            .status("Aktif")
            .score(75)
            .salary(12500)
            .join_date("14.03.2022")
            .build(),
        record(2)
            .first_name("Ayşe")
            .last_name("Yılmaz, A.")
            .department("Finans")
            .city("İzmir")
            .status("Beklemede")
            .score(40)
            .salary(8000)
            .join_date("01.11.2023")
            .build(),
    ]
}

#[test]
fn test_csv_payload_snapshot() {
    let selection = ExportSelection::all(ExportFormat::Csv, ExportOptions::default());
    let payload = serialize(&rows(), &selection).expect("csv");

    insta::assert_snapshot!(payload.text().trim_end(), @r###"
    ID,Ad,Soyad,E-posta,Telefon,Departman,Şehir,Durum,Puan,Maaş,Katılım Tarihi,Aktif
    1,Ali,Veli,user1@bookmeza.com,+90 555 000 00 00,Yazılım,Ankara,Aktif,75,₺12.500,14.03.2022,Evet
    2,Ayşe,"Yılmaz, A.",user2@bookmeza.com,+90 555 000 00 00,Finans,İzmir,Beklemede,40,₺8.000,01.11.2023,Hayır
    "###);
}

#[test]
fn test_tab_delimited_payload_snapshot() {
    let selection = ExportSelection::all(
        ExportFormat::Csv,
        ExportOptions {
            include_headers: false,
            delimiter: Delimiter::Tab,
        },
    );
    let payload = serialize(&rows()[..1], &selection).expect("csv");

    insta::assert_snapshot!(payload.text().trim_end(), @"1	Ali	Veli	user1@bookmeza.com	+90 555 000 00 00	Yazılım	Ankara	Aktif	75	₺12.500	14.03.2022	Evet");
}

#[test]
fn test_excel_payload_snapshot() {
    let selection = ExportSelection::all(ExportFormat::Excel, ExportOptions::default());
    let payload = serialize(&rows()[..1], &selection).expect("excel");

    insta::assert_snapshot!(payload.text(), @r###"<html><head><meta charset="utf-8"><title>Bookmeza Export</title><style>table{border-collapse:collapse;width:100%;font-family:Arial,sans-serif;}th,td{border:1px solid #ddd;padding:8px;}th{background-color:#f0f0f0;font-weight:bold;}</style></head><body><table><thead><tr><th>ID</th><th>Ad</th><th>Soyad</th><th>E-posta</th><th>Telefon</th><th>Departman</th><th>Şehir</th><th>Durum</th><th>Puan</th><th>Maaş</th><th>Katılım Tarihi</th><th>Aktif</th></tr></thead><tbody><tr><td>1</td><td>Ali</td><td>Veli</td><td>user1@bookmeza.com</td><td>+90 555 000 00 00</td><td>Yazılım</td><td>Ankara</td><td>Aktif</td><td>75</td><td>₺12.500</td><td>14.03.2022</td><td>Evet</td></tr></tbody></table></body></html>"###);
}
