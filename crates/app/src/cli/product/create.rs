use clap::Args;
use rust_decimal::Decimal;
use storefront_app::{
    database::{self, Db},
    domain::products::{
        PgProductsService, ProductsService,
        models::{NewProduct, ProductUuid},
    },
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Product display name
    #[arg(long)]
    name: String,

    /// URL slug; derived from the name when omitted
    #[arg(long)]
    slug: Option<String>,

    /// Unit price, e.g. 150000 or 19.99
    #[arg(long)]
    price: Decimal,

    /// Image path; repeat for several images
    #[arg(long = "image")]
    images: Vec<String>,

    /// Optional product UUID; generated when omitted
    #[arg(long)]
    product_uuid: Option<Uuid>,

    /// Hide the product from the storefront
    #[arg(long)]
    inactive: bool,

    /// Mark the product as out of stock
    #[arg(long)]
    out_of_stock: bool,

    /// Feature the product
    #[arg(long)]
    featured: bool,

    /// Mark the product as on sale
    #[arg(long)]
    on_sale: bool,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    if args.name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }

    if args.price.is_sign_negative() {
        return Err("price cannot be negative".to_string());
    }

    let pool = database::connect(&args.database_url, database::CLI_MAX_CONNECTIONS)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgProductsService::new(Db::new(pool));
    let slug = args.slug.unwrap_or_else(|| slugify(&args.name));

    let product = service
        .create_product(NewProduct {
            uuid: args
                .product_uuid
                .map_or_else(ProductUuid::new, ProductUuid::from_uuid),
            name: args.name.trim().to_string(),
            slug,
            images: args.images,
            price: args.price,
            is_active: !args.inactive,
            in_stock: !args.out_of_stock,
            is_featured: args.featured,
            on_sale: args.on_sale,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("product_slug: {}", product.slug);
    println!("product_price: {}", product.price);

    Ok(())
}

fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
