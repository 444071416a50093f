use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};

use storefront_catalog::{CategoriesResponse, ProductsResponse};
use storefront_products::{RecordMapper, StorefrontConfig};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: map-records [PRODUCT_JSON] [--categories CATEGORIES_JSON]\n\
         \n\
         Reads one product response (from PRODUCT_JSON, or stdin when omitted)\n\
         and prints the mapped product view as JSON. Categories are taken from\n\
         the product's expand unless --categories gives a JSON list of\n\
         category records.\n\
         \n\
         Env vars:\n\
           POCKETBASE_URL, STOREFRONT_LOW_STOCK_THRESHOLD, STOREFRONT_LOG_FORMAT, RUST_LOG\n"
    );
    std::process::exit(2);
}

#[derive(Debug, Default)]
struct Args {
    product: Option<PathBuf>,
    categories: Option<PathBuf>,
}

fn parse_args(raw: impl IntoIterator<Item = String>) -> anyhow::Result<Args> {
    let mut args = Args::default();
    let mut raw = raw.into_iter();
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "-h" | "--help" => usage_and_exit(),
            "--categories" => {
                let path = raw.next().context("--categories needs a file argument")?;
                args.categories = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            _ if args.product.is_some() => bail!("only one product file can be mapped at a time"),
            _ => args.product = Some(PathBuf::from(&arg)),
        }
    }
    Ok(args)
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read product JSON from stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    storefront_observability::init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = StorefrontConfig::from_env()?;
    let mapper = RecordMapper::from_config(&config);

    let raw = read_input(args.product.as_ref())?;
    let record: ProductsResponse =
        serde_json::from_str(&raw).context("product JSON is not a product record")?;

    let view = match &args.categories {
        Some(path) => {
            let raw = read_input(Some(path))?;
            let records: Vec<CategoriesResponse> = serde_json::from_str(&raw)
                .context("categories JSON is not a list of category records")?;
            let categories: Vec<_> = records
                .iter()
                .map(|c| mapper.map_record_to_category(c))
                .collect();
            mapper.map_product_to_view(&record, Some(categories.as_slice()))
        }
        None => mapper.map_product(&record),
    };

    tracing::info!(product = %view.id, stock_status = %view.stock_status, "mapped product");
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> anyhow::Result<Args> {
        parse_args(raw.iter().map(|s| s.to_string()))
    }

    #[test]
    fn product_and_categories() {
        let parsed = args(&["tee.json", "--categories", "cats.json"]).unwrap();
        assert_eq!(parsed.product, Some(PathBuf::from("tee.json")));
        assert_eq!(parsed.categories, Some(PathBuf::from("cats.json")));
    }

    #[test]
    fn no_args_reads_stdin() {
        let parsed = args(&[]).unwrap();
        assert!(parsed.product.is_none());
        assert!(parsed.categories.is_none());
    }

    #[test]
    fn rejects_bad_args() {
        assert!(args(&["--categories"]).is_err());
        assert!(args(&["--verbose"]).is_err());
        assert!(args(&["a.json", "b.json"]).is_err());
    }
}
