//! HTML for the five pages. Every page gets the same branding context.

use crate::models::employee::Employee;

#[derive(Debug, Clone)]
pub struct Branding {
    pub color: String,
    pub group_name: String,
    pub group_slogan: String,
    pub bg_url: String,
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(branding: &Branding, title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ background-color: {color}; background-image: url("{bg_url}"); background-size: cover; font-family: sans-serif; }}
main {{ background: rgba(255, 255, 255, 0.85); max-width: 640px; margin: 40px auto; padding: 24px; }}
</style>
</head>
<body>
<main>
<header>
<h1>{group_name}</h1>
<p>{group_slogan}</p>
<nav><a href="/">Add Employee</a> | <a href="/getemp">Get Employee</a> | <a href="/about">About</a></nav>
</header>
{content}
</main>
</body>
</html>
"#,
        title = escape(title),
        color = escape(&branding.color),
        bg_url = escape(&branding.bg_url),
        group_name = escape(&branding.group_name),
        group_slogan = escape(&branding.group_slogan),
        content = content,
    )
}

pub fn add_employee_form(branding: &Branding) -> String {
    layout(
        branding,
        "Add Employee",
        r#"<h2>Employee Database</h2>
<form action="/addemp" method="post">
<p><label>Employee ID <input type="text" name="emp_id" required></label></p>
<p><label>First Name <input type="text" name="first_name" required></label></p>
<p><label>Last Name <input type="text" name="last_name" required></label></p>
<p><label>Primary Skill <input type="text" name="primary_skill" required></label></p>
<p><label>Location <input type="text" name="location" required></label></p>
<p><input type="submit" value="Update Database"></p>
</form>"#,
    )
}

pub fn about(branding: &Branding) -> String {
    layout(
        branding,
        "About",
        &format!(
            "<h2>About</h2>\n<p>{} keeps a small employee directory: add a record, then look it up by ID.</p>",
            escape(&branding.group_name)
        ),
    )
}

/// `name` is the full name of the new employee, or an error placeholder.
pub fn add_employee_output(branding: &Branding, name: &str) -> String {
    layout(
        branding,
        "Employee Added",
        &format!(
            "<h2>Employee Added</h2>\n<p>Employee name: <strong>{}</strong></p>\n<p><a href=\"/\">Add another</a></p>",
            escape(name)
        ),
    )
}

pub fn get_employee_form(branding: &Branding) -> String {
    layout(
        branding,
        "Get Employee",
        r#"<h2>Get Employee Information</h2>
<form action="/fetchdata" method="post">
<p><label>Employee ID <input type="text" name="emp_id" required></label></p>
<p><input type="submit" value="Get Employee"></p>
</form>"#,
    )
}

pub fn get_employee_output(branding: &Branding, employee: &Employee) -> String {
    layout(
        branding,
        "Employee Information",
        &format!(
            r#"<h2>Employee Information</h2>
<table>
<tr><th>Employee ID</th><td>{id}</td></tr>
<tr><th>First Name</th><td>{fname}</td></tr>
<tr><th>Last Name</th><td>{lname}</td></tr>
<tr><th>Primary Skill</th><td>{interest}</td></tr>
<tr><th>Location</th><td>{location}</td></tr>
</table>"#,
            id = escape(&employee.emp_id),
            fname = escape(&employee.first_name),
            lname = escape(&employee.last_name),
            interest = escape(&employee.primary_skill),
            location = escape(&employee.location),
        ),
    )
}
