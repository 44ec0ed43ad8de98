//! Menus
//!
//! The role loop and the employee and client menus. Every action reads its fields through
//! [`Prompt`], calls into the [`Dealership`] and prints the outcome; nothing here decides
//! business rules.

use std::io::{BufRead, Write};

use tracing::debug;

use forecourt::{
    dealership::{Dealership, SaleError},
    entities::{ClientId, Displayable, EmployeeId, VehicleId},
    pricing::{Amount, parse_amount},
};

use crate::cli::{
    prompt::{Prompt, PromptError},
    render,
};

/// Interactive console over one dealership.
#[derive(Debug)]
pub(crate) struct Console<R, W> {
    dealership: Dealership,
    prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn new(dealership: Dealership, input: R, output: W) -> Self {
        Console {
            dealership,
            prompt: Prompt::new(input, output),
        }
    }

    /// Run the role loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or written.
    pub(crate) fn run(&mut self) -> Result<(), PromptError> {
        match self.role_loop() {
            Err(PromptError::Closed) => {
                debug!("input closed");

                self.prompt.say("")?;
                self.farewell()
            }
            other => other,
        }
    }

    fn role_loop(&mut self) -> Result<(), PromptError> {
        loop {
            self.prompt
                .say("\n=== Dealership ===\n1. Employee\n2. Client\n0. Exit")?;

            match self.prompt.ask("Option")?.as_str() {
                "1" => self.employee_menu()?,
                "2" => self.client_menu()?,
                "0" => return self.farewell(),
                _ => self.prompt.say("Invalid option.")?,
            }
        }
    }

    fn farewell(&mut self) -> Result<(), PromptError> {
        self.prompt.say("Thank you for using the dealership. Goodbye!")
    }

    fn employee_menu(&mut self) -> Result<(), PromptError> {
        loop {
            self.prompt.say(
                "\n--- Employee Menu ---\n\
                 1. Add employee\n2. List employees\n3. Find employee\n\
                 4. Add client\n5. List clients\n6. Find client\n\
                 7. Add vehicle\n8. List vehicles\n9. List sales\n0. Back",
            )?;

            match self.prompt.ask("Option")?.as_str() {
                "1" => self.add_employee()?,
                "2" => render::employees(self.prompt.output(), self.dealership.employees())?,
                "3" => self.find_employee()?,
                "4" => self.add_client()?,
                "5" => render::clients(self.prompt.output(), self.dealership.clients())?,
                "6" => self.find_client()?,
                "7" => self.add_vehicle()?,
                "8" => render::vehicles(self.prompt.output(), self.dealership.vehicles())?,
                "9" => render::sales(self.prompt.output(), self.dealership.sales())?,
                "0" => return Ok(()),
                _ => self.prompt.say("Invalid option.")?,
            }
        }
    }

    fn client_menu(&mut self) -> Result<(), PromptError> {
        loop {
            self.prompt.say(
                "\n--- Client Menu ---\n1. Register\n2. List vehicles\n3. Buy vehicle\n0. Back",
            )?;

            match self.prompt.ask("Option")?.as_str() {
                "1" => self.add_client()?,
                "2" => render::vehicles(self.prompt.output(), self.dealership.vehicles())?,
                "3" => self.buy_vehicle()?,
                "0" => return Ok(()),
                _ => self.prompt.say("Invalid option.")?,
            }
        }
    }

    fn add_employee(&mut self) -> Result<(), PromptError> {
        let name = self.prompt.ask("Name")?;
        let national_id = self.prompt.ask("National ID")?;
        let position = self.prompt.ask("Position")?;
        let salary = self.ask_amount("Salary", "Invalid salary.")?;

        match self
            .dealership
            .add_employee(name, national_id, position, salary)
        {
            Ok(employee) => self.prompt.say(&employee.greeting()),
            Err(error) => self
                .prompt
                .say(&format!("Could not register employee: {error}.")),
        }
    }

    fn add_client(&mut self) -> Result<(), PromptError> {
        let name = self.prompt.ask("Name")?;
        let national_id = self.prompt.ask("National ID")?;
        let phone = self.prompt.ask("Phone")?;
        let tier = self.prompt.ask("Tier (VIP/Regular)")?;

        let client = self.dealership.add_client(name, national_id, phone, tier);

        self.prompt.say(&format!(
            "{} Your client ID is {}.",
            client.greeting(),
            client.id()
        ))
    }

    fn add_vehicle(&mut self) -> Result<(), PromptError> {
        let brand = self.prompt.ask("Brand")?;
        let model = self.prompt.ask("Model")?;
        let price = self.ask_amount("Price", "Invalid price.")?;

        match self.dealership.add_vehicle(brand, model, price) {
            Ok(vehicle) => self.prompt.say(&vehicle.greeting()),
            Err(error) => self.prompt.say(&format!("Could not add vehicle: {error}.")),
        }
    }

    fn find_employee(&mut self) -> Result<(), PromptError> {
        let Some(id) = self.ask_id::<EmployeeId>("Employee ID")? else {
            return Ok(());
        };

        match self.dealership.find_employee(id) {
            Some(employee) => {
                let line = employee.display();
                self.prompt.say(&line)
            }
            None => self.prompt.say("Not found."),
        }
    }

    fn find_client(&mut self) -> Result<(), PromptError> {
        let Some(id) = self.ask_id::<ClientId>("Client ID")? else {
            return Ok(());
        };

        match self.dealership.find_client(id) {
            Some(client) => {
                let line = client.display();
                self.prompt.say(&line)
            }
            None => self.prompt.say("Not found."),
        }
    }

    fn buy_vehicle(&mut self) -> Result<(), PromptError> {
        if let Err(error) = self.dealership.ensure_ready_for_sale() {
            return self.prompt.say(&format!("Cannot buy: {error}."));
        }

        render::vehicles(self.prompt.output(), self.dealership.vehicles())?;

        let Some(vehicle_id) = self.ask_id::<VehicleId>("Vehicle ID")? else {
            return Ok(());
        };

        if self.dealership.find_vehicle(vehicle_id).is_none() {
            let error = SaleError::VehicleNotFound(vehicle_id);

            return self.prompt.say(&format!("Not found: {error}."));
        }

        let Some(client_id) = self.ask_id::<ClientId>("Client ID")? else {
            return Ok(());
        };

        match self.dealership.purchase_vehicle(vehicle_id, client_id) {
            Ok(sale) => render::receipt(self.prompt.output(), &sale)?,
            Err(error) if error.is_not_found() => {
                self.prompt.say(&format!("Not found: {error}."))?;
            }
            Err(error) => self.prompt.say(&format!("Purchase failed: {error}."))?,
        }

        Ok(())
    }

    /// Ask for an amount in the dealership currency until one parses.
    fn ask_amount(&mut self, label: &str, invalid: &str) -> Result<Amount, PromptError> {
        loop {
            let answer = self.prompt.ask(label)?;

            match parse_amount(&answer, self.dealership.currency()) {
                Ok(amount) => return Ok(amount),
                Err(error) => {
                    debug!(%error, "amount rejected");

                    self.prompt.say(invalid)?;
                }
            }
        }
    }

    fn ask_id<T: From<u32>>(&mut self, label: &str) -> Result<Option<T>, PromptError> {
        let answer = self.prompt.ask(label)?;

        match answer.parse::<u32>() {
            Ok(id) => Ok(Some(T::from(id))),
            Err(_) => {
                self.prompt.say("Invalid ID.")?;

                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use super::*;

    fn run_script(dealership: Dealership, script: &str) -> TestResult<String> {
        let mut output = Vec::new();

        Console::new(dealership, script.as_bytes(), &mut output).run()?;

        Ok(String::from_utf8(output)?)
    }

    #[test]
    fn exit_option_says_goodbye() -> TestResult {
        let output = run_script(Dealership::default(), "0\n")?;

        assert!(output.ends_with("Goodbye!\n"));

        Ok(())
    }

    #[test]
    fn end_of_input_exits_cleanly() -> TestResult {
        let output = run_script(Dealership::default(), "1\n")?;

        assert!(output.contains("--- Employee Menu ---"));
        assert!(output.ends_with("Goodbye!\n"));

        Ok(())
    }

    #[test]
    fn unknown_option_is_reported() -> TestResult {
        let output = run_script(Dealership::default(), "7\n0\n")?;

        assert!(output.contains("Invalid option."));

        Ok(())
    }

    #[test]
    fn client_buys_vehicle_and_gets_receipt() -> TestResult {
        let mut dealership = Dealership::default();
        dealership.add_client("Bob", "202", "555", "VIP");
        dealership.add_vehicle("Honda", "Civic", Money::from_minor(10_000, USD))?;

        let output = run_script(dealership, "2\n3\n1\n1\n2\n0\n0\n")?;

        assert!(output.contains("Purchase successful for Bob!"));
        assert!(output.contains("$80.00"));
        assert!(output.contains("No records."));

        Ok(())
    }

    #[test]
    fn buying_without_clients_is_refused() -> TestResult {
        let output = run_script(Dealership::default(), "2\n3\n0\n0\n")?;

        assert!(output.contains("Cannot buy: no clients registered; register first."));

        Ok(())
    }

    #[test]
    fn buying_unknown_vehicle_reports_not_found() -> TestResult {
        let mut dealership = Dealership::default();
        dealership.add_client("Bob", "202", "555", "VIP");
        dealership.add_vehicle("Honda", "Civic", Money::from_minor(10_000, USD))?;

        let output = run_script(dealership, "2\n3\n9\n0\n0\n")?;

        assert!(output.contains("Not found: vehicle 9 not found."));
        assert!(!output.contains("Client ID:"));

        Ok(())
    }

    #[test]
    fn employee_salary_is_validated() -> TestResult {
        let script = "1\n1\nAna\n101\nSales\nlots\n1500\n1\nDan\n104\nSales\n-5\n2\n0\n0\n";

        let output = run_script(Dealership::default(), script)?;

        assert!(output.contains("Invalid salary.\nSalary: "));
        assert!(output.contains("Hi, I'm Ana and I work as Sales."));
        assert!(output.contains("Could not register employee"));
        assert!(output.contains("$1,500.00"));
        assert!(!output.contains("Dan"));

        Ok(())
    }

    #[test]
    fn vehicle_price_is_asked_again_until_valid() -> TestResult {
        let script = "1\n7\nHonda\nCivic\ncheap\n100\n8\n0\n0\n";

        let output = run_script(Dealership::default(), script)?;

        assert!(output.contains("Invalid price.\nPrice: "));
        assert!(output.contains("I'm a Honda Civic and I'm for sale."));
        assert!(output.contains("$100.00"));

        Ok(())
    }

    #[test]
    fn registered_employee_can_be_found() -> TestResult {
        let script = "1\n1\nAna\n101\nSales\n1500\n3\n1\n3\nx\n3\n2\n0\n0\n";

        let output = run_script(Dealership::default(), script)?;

        assert!(output.contains("Hi, I'm Ana and I work as Sales."));
        assert!(output.contains("ID: 1, Name: Ana, National ID: 101"));
        assert!(output.contains("Invalid ID."));
        assert!(output.contains("Not found."));

        Ok(())
    }

    #[test]
    fn client_registration_prints_greeting_and_id() -> TestResult {
        let output = run_script(Dealership::default(), "2\n1\nBob\n202\n555\nvip\n0\n0\n")?;

        assert!(output.contains("Hi, I'm Bob, a vip client. Your client ID is 1."));

        Ok(())
    }
}
