use ql_core::CurrencyTable;

pub fn run(amount: f64, from: &str, to: &str) -> Result<(), String> {
    let table = CurrencyTable::default();
    let converted = table.convert(amount, from, to).map_err(|e| e.to_string())?;
    let target = table
        .get(to)
        .ok_or_else(|| format!("unknown currency: {to}"))?;
    println!("  {amount} {from} = {converted} {target}");
    Ok(())
}
