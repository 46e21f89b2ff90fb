use crate::models::{Catalog, GuestPreference, PizzaRecommendation, Recommendations};

/// Display a generated order in a formatted list.
pub fn display_order(order: &Recommendations) {
    if order.is_empty() {
        println!("No recommendations generated (no guests, no expected count, or empty catalog).");
        return;
    }

    println!();
    println!("=== Pizza Order ===");
    println!();

    for (i, pizza) in order.pizzas.iter().enumerate() {
        println!(
            "{:>3}. {} x {} {} - {}{}",
            i + 1,
            pizza.quantity,
            pizza.size,
            pizza.style,
            describe_toppings(pizza),
            tags_for(pizza),
        );
        if !pizza.guests.is_empty() {
            println!("     guests: {}", pizza.guests.join(", "));
        }
    }

    if !order.beverages.is_empty() {
        println!();
        println!("=== Beverages ===");
        println!();
        for bev in &order.beverages {
            let tag = if bev.for_non_respondents {
                "  [default]"
            } else {
                ""
            };
            println!("  {} x {}{}", bev.quantity, bev.beverage, tag);
        }
    }

    let covered: u32 = order.pizzas.iter().map(|p| p.guest_count).sum();
    println!();
    println!("--- Summary ---");
    println!("Pizza line items: {}", order.pizzas.len());
    println!("Total pizzas: {}", order.total_pizzas());
    println!("Guests covered: {}", covered);
    println!();
}

fn describe_toppings(pizza: &PizzaRecommendation) -> String {
    if let Some((left, right)) = &pizza.halves {
        let side = |toppings: &[String]| {
            if toppings.is_empty() {
                "plain".to_string()
            } else {
                toppings.join(", ")
            }
        };
        format!(
            "half & half: [{}] / [{}]",
            side(&left.toppings),
            side(&right.toppings)
        )
    } else if pizza.toppings.is_empty() {
        "plain".to_string()
    } else {
        pizza.toppings.join(", ")
    }
}

fn tags_for(pizza: &PizzaRecommendation) -> String {
    let mut tags = Vec::new();

    for restriction in &pizza.dietary_restrictions {
        tags.push(restriction.label().to_string());
    }
    if pizza.for_non_respondents {
        tags.push("default".to_string());
    }

    if tags.is_empty() {
        String::new()
    } else {
        format!("  [{}]", tags.join(", "))
    }
}

/// Display the host's catalog.
pub fn display_catalog(catalog: &Catalog) {
    println!();
    println!("=== Toppings ({}) ===", catalog.toppings.len());
    for topping in &catalog.toppings {
        let gluten = if topping.contains_gluten {
            ", contains gluten"
        } else {
            ""
        };
        println!("  {} ({:?}{})", topping.name, topping.kind, gluten);
    }

    println!();
    println!("=== Beverages ({}) ===", catalog.beverages.len());
    for beverage in &catalog.beverages {
        println!("  {} ({:?})", beverage.name, beverage.kind);
    }
    println!();
}

/// Display a short guest list with their preference counts.
pub fn display_guest_list(guests: &[GuestPreference]) {
    println!();
    println!("=== Guests ({}) ===", guests.len());
    for guest in guests {
        let restrictions: Vec<&str> = guest
            .dietary_restrictions
            .iter()
            .map(|r| r.label())
            .collect();
        let tag = if restrictions.is_empty() {
            String::new()
        } else {
            format!(" [{}]", restrictions.join(", "))
        };
        println!(
            "  {}{} - likes {}, dislikes {}",
            guest.name,
            tag,
            guest.liked_toppings.len(),
            guest.disliked_toppings.len()
        );
    }
    println!();
}
