use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{
    deactivate_employee, find_employee, insert_employee, list_active_employees, update_employee,
};
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Employee { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        EmployeeAction::Add {
            name,
            role,
            salary,
            discount,
        } => {
            let emp = Employee::new(name, role, *salary, cfg.monthly_hours, *discount);
            insert_employee(&pool.conn, &emp)?;
            success(format!(
                "Employee {} added. Salary: {:.2}/month - {:.2}/hour",
                emp.name, emp.monthly_salary, emp.hourly_rate,
            ));
        }

        EmployeeAction::Edit {
            name,
            new_name,
            role,
            salary,
            discount,
        } => {
            let mut emp = find_employee(&pool.conn, name)?;

            if let Some(n) = new_name {
                emp.name = n.clone();
            }
            if let Some(r) = role {
                emp.role = r.clone();
            }
            if let Some(s) = salary {
                emp.monthly_salary = *s;
                // re-derive the rate with the current config divisor
                emp.monthly_hours = cfg.monthly_hours;
                emp.hourly_rate = *s / cfg.monthly_hours as f64;
            }
            if let Some(d) = discount {
                emp.discount = *d;
            }

            update_employee(&pool.conn, &emp)?;
            success(format!("Employee {} updated.", emp.name));
        }

        EmployeeAction::List => {
            let employees = list_active_employees(&pool.conn)?;
            if employees.is_empty() {
                println!("No active employees.");
                return Ok(());
            }
            print_employees(&employees);
        }

        EmployeeAction::Remove { name } => {
            deactivate_employee(&pool.conn, name)?;
            success(format!("Employee {} deactivated (history kept).", name));
        }
    }

    Ok(())
}

fn print_employees(employees: &[Employee]) {
    let mut table = Table::new(vec![
        Column::new("Name", 20),
        Column::new("Role", 16),
        Column::new("Salary", 10),
        Column::new("Rate/h", 8),
        Column::new("Since", 10),
    ]);

    for emp in employees {
        table.add_row(vec![
            emp.name.clone(),
            emp.role.clone(),
            format!("{:.2}", emp.monthly_salary),
            format!("{:.2}", emp.hourly_rate),
            emp.created_at.clone(),
        ]);
    }

    println!("{}", table.render());
}
