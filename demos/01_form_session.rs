/// form session - drive the form the way a ui would
///
/// run with RUST_LOG=debug to see every field change
use mortgage_calculator_rs::{Field, MortgageForm, MortgageType};

fn show(form: &MortgageForm) {
    for field in Field::ALL {
        let value = form.input().value(field);
        match form.error_for(field) {
            Some(error) => println!("  {:<22} [{}]  <- {}", field.label(), value, error),
            None => println!("  {:<22} [{}]", field.label(), value),
        }
    }
    println!("  Mortgage Type          ({})", form.mortgage_type());

    if let Some([monthly, total]) = form.result_lines() {
        println!("  Your Results");
        println!("    {}", monthly);
        println!("    {}", total);
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let mut form = MortgageForm::new();

    println!("=== submit an empty form ===");
    let _ = form.submit();
    show(&form);

    println!("=== fill in amount and term only ===");
    form.set_amount("300000");
    form.set_term("25");
    let _ = form.submit();
    show(&form);

    println!("=== add the rate and resubmit ===");
    form.set_rate("5.25");
    form.submit()?;
    show(&form);

    println!("=== switch to interest only (no resubmit) ===");
    form.select_type(MortgageType::InterestOnly);
    show(&form);

    println!("=== resubmit ===");
    form.submit()?;
    show(&form);

    println!("=== type something that is not a number ===");
    form.set_term("twenty five");
    let _ = form.submit();
    show(&form);

    Ok(())
}
