/// json state - form snapshots for debugging
use mortgage_calculator_rs::{CalculatorConfig, MortgageForm};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CalculatorConfig::from_json(r#"{ "currency_symbol": "£", "decimal_places": 2 }"#)?;
    let mut form = MortgageForm::with_config(config)?;

    form.set_amount("120000");
    form.set_term("10");
    let _ = form.submit();

    println!("after a rejected submission:");
    println!("{}\n", form.json());

    form.set_rate("0");
    form.submit()?;

    println!("after a zero-interest calculation:");
    println!("{}", form.json());

    Ok(())
}
