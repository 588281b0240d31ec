use markup_vars::{install, OptionsLoader, PlainHost};

fn main() -> Result<(), markup_vars::Error> {
    // Values from the file can be overridden with MDVARS__* variables,
    // e.g. MDVARS__SEVERITY=error or MDVARS__DATA__since=1949.
    let options = OptionsLoader::new()
        .with_file("demos/variables.toml", true)
        .with_env("MDVARS", "__")
        .load()?;

    let mut host = PlainHost::new();
    install(&mut host, options)?;

    for line in [
        "Founded in #{since}, #{who|link} is the United Nations health agency.",
        "#{who|-} leads global efforts to expand universal health coverage.",
        "Unknown references such as #{nobody} are left as written.",
    ] {
        println!("{}", host.render(line)?);
    }

    Ok(())
}
