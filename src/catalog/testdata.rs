//! Small XML property-list builders for tests.

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

pub(crate) fn package_xml(url: &str, size: u64) -> String {
    format!(
        "<dict><key>URL</key><string>{}</string><key>Size</key><integer>{size}</integer></dict>",
        escape(url)
    )
}

pub(crate) fn package_xml_full(url: &str, size: u64, integrity_url: &str, integrity_size: u64) -> String {
    format!(
        "<dict>\
         <key>URL</key><string>{}</string>\
         <key>Size</key><integer>{size}</integer>\
         <key>IntegrityDataURL</key><string>{}</string>\
         <key>IntegrityDataSize</key><integer>{integrity_size}</integer>\
         </dict>",
        escape(url),
        escape(integrity_url)
    )
}

/// A product entry; `os_install` of `None` leaves out `ExtendedMetaInfo`.
pub(crate) fn product_xml(id: &str, os_install: Option<&str>, packages: &[String]) -> String {
    let meta = os_install
        .map(|value| {
            format!(
                "<key>ExtendedMetaInfo</key><dict>\
                 <key>InstallAssistantPackageIdentifiers</key><dict>\
                 <key>OSInstall</key><string>{}</string>\
                 <key>SharedSupport</key><string>com.apple.pkg.InstallAssistant</string>\
                 </dict></dict>",
                escape(value)
            )
        })
        .unwrap_or_default();

    format!(
        "<key>{}</key><dict>\
         <key>PostDate</key><date>2018-09-24T17:46:31Z</date>\
         {meta}\
         <key>Packages</key><array>{}</array>\
         </dict>",
        escape(id),
        packages.concat()
    )
}

pub(crate) fn catalog_xml(products: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
<key>CatalogVersion</key><integer>2</integer>
<key>ApplePostURL</key><string>http://swpost.apple.com/stats</string>
<key>Products</key><dict>{}</dict>
</dict>
</plist>
"#,
        products.concat()
    )
}

/// Binary property list with one qualifying product holding one package.
pub(crate) fn binary_catalog(id: &str, url: &str, size: u64) -> Vec<u8> {
    use plist::{Dictionary, Value};

    let mut package = Dictionary::new();
    package.insert("URL".to_string(), Value::String(url.to_string()));
    package.insert("Size".to_string(), Value::Integer(size.into()));

    let mut identifiers = Dictionary::new();
    identifiers.insert("OSInstall".to_string(), Value::String("com.apple.mpkg.OSInstall".to_string()));
    let mut meta = Dictionary::new();
    meta.insert("InstallAssistantPackageIdentifiers".to_string(), Value::Dictionary(identifiers));

    let mut product = Dictionary::new();
    product.insert("ExtendedMetaInfo".to_string(), Value::Dictionary(meta));
    product.insert("Packages".to_string(), Value::Array(vec![Value::Dictionary(package)]));

    let mut products = Dictionary::new();
    products.insert(id.to_string(), Value::Dictionary(product));
    let mut root = Dictionary::new();
    root.insert("Products".to_string(), Value::Dictionary(products));

    let mut document = Vec::new();
    Value::Dictionary(root)
        .to_writer_binary(&mut document)
        .expect("binary plist");
    document
}
