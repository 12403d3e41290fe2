//! Rendering of the Arch Linux PKGBUILD.
//!
//! Fields are substituted as-is. Nothing is escaped, so a value containing a
//! double or single quote produces a broken PKGBUILD.

use chrono::NaiveDate;

use crate::package::ResolvedPackage;

/// Renders `package` into a PKGBUILD, stamping `date` into the header comment.
pub fn render(package: &ResolvedPackage, date: NaiveDate) -> String {
    format!(
        r#"
#Automatically generated by pip2arch on {date}

pkgname={outname}
pkgver={version}
pkgrel=1
pkgdesc="{description}"
url="{homepage}"
depends=('{interpreter}' {depends})
license=('{license}')
arch=('any')
source=('{download_url}')
md5sums=('{md5}')

build() {{
    cd $srcdir/{name}-{version}
    {interpreter} setup.py install --root="$pkgdir" || return 1
}}
"#,
        date = date.format("%Y-%m-%d"),
        outname = package.output_name,
        version = package.version,
        description = package.description,
        homepage = package.homepage,
        interpreter = package.interpreter,
        depends = quote_depends(&package.depends),
        license = package.license,
        download_url = package.download_url,
        md5 = package.md5,
        name = package.name,
    )
}

/// `["foo", "bar"]` -> `'foo' 'bar'`; empty list -> empty string.
fn quote_depends(depends: &[String]) -> String {
    depends
        .iter()
        .map(|d| format!("'{}'", d))
        .collect::<Vec<_>>()
        .join(" ")
}
