use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use rostercheck_core::CanonicalContact;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
}

pub fn normalize(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let contact = CanonicalContact::normalize(&args.name, &args.email, &args.phone);

    if ctx.json {
        return print_json(&contact);
    }

    println!("name:  {}", contact.name());
    println!("email: {}", contact.email());
    println!("phone: {}", contact.phone());
    if !contact.is_indexable() {
        println!("(empty name: this contact would be skipped during comparison)");
    }
    Ok(())
}
