//! Demo catalog content.
//!
//! The in-memory store loads [`DEFAULT_CATEGORIES`] and [`DEMO_COMPONENTS`]
//! at construction. For PostgreSQL the same content is inserted through the
//! [`CatalogStore`] contract by [`seed_if_empty`], and the optional
//! navigation pack by [`add_navigation_components`].

use std::collections::HashMap;

use catalog_core::types::DbId;

use crate::models::category::CreateCategory;
use crate::models::component::CreateComponent;
use crate::store::{CatalogStore, StoreResult};

/// Name of the category the navigation pack is attached to.
pub const NAVIGATION_CATEGORY: &str = "Navigation";

/// A category definition embedded in the binary.
#[derive(Debug, Clone, Copy)]
pub struct SeedCategory {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

impl SeedCategory {
    pub fn to_create(&self) -> CreateCategory {
        CreateCategory {
            name: self.name.to_string(),
            icon: self.icon.to_string(),
            description: Some(self.description.to_string()),
        }
    }
}

/// A component definition embedded in the binary. The owning category is
/// referenced by name because ids are assigned by the store.
#[derive(Debug, Clone, Copy)]
pub struct SeedComponent {
    pub category: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub html: &'static str,
    pub css: &'static str,
    pub js: &'static str,
    pub tags: &'static [&'static str],
}

impl SeedComponent {
    pub fn to_create(&self, category_id: DbId) -> CreateComponent {
        CreateComponent {
            name: self.name.to_string(),
            description: Some(self.description.to_string()),
            html: self.html.to_string(),
            css: self.css.to_string(),
            js: self.js.to_string(),
            category_id,
            tags: Some(self.tags.iter().map(|t| t.to_string()).collect()),
        }
    }
}

pub const DEFAULT_CATEGORIES: &[SeedCategory] = &[
    SeedCategory {
        name: "Buttons",
        icon: "fas fa-hand-pointer",
        description: "Interactive button components",
    },
    SeedCategory {
        name: "Headings",
        icon: "fas fa-heading",
        description: "Typography and heading styles",
    },
    SeedCategory {
        name: "Sections",
        icon: "fas fa-layer-group",
        description: "Layout sections and containers",
    },
    SeedCategory {
        name: NAVIGATION_CATEGORY,
        icon: "fas fa-bars",
        description: "Navigation bars and menus",
    },
    SeedCategory {
        name: "Sliders",
        icon: "fas fa-images",
        description: "Image carousels and sliders",
    },
    SeedCategory {
        name: "Footers",
        icon: "fas fa-shoe-prints",
        description: "Footer sections and layouts",
    },
    SeedCategory {
        name: "GSAP Animations",
        icon: "fas fa-magic",
        description: "GSAP powered animations",
    },
];

pub const DEMO_COMPONENTS: &[SeedComponent] = &[
    SeedComponent {
        category: "Buttons",
        name: "Primary Button",
        description: "Modern primary action button",
        html: r#"<button class="btn-primary">Get Started</button>"#,
        css: r#".btn-primary {
  background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
  color: white;
  border: none;
  padding: 12px 24px;
  border-radius: 8px;
  font-weight: 600;
  cursor: pointer;
  transition: transform 0.2s, box-shadow 0.2s;
}

.btn-primary:hover {
  transform: translateY(-2px);
  box-shadow: 0 8px 25px rgba(102, 126, 234, 0.4);
}"#,
        js: r#"document.querySelector('.btn-primary').addEventListener('click', function() {
  this.style.transform = 'scale(0.95)';
  setTimeout(() => {
    this.style.transform = 'translateY(-2px)';
  }, 150);
});"#,
        tags: &["primary", "gradient", "hover"],
    },
    SeedComponent {
        category: "Buttons",
        name: "Glass Button",
        description: "Glassmorphism style button",
        html: r#"<button class="btn-glass">Glass Effect</button>"#,
        css: r#".btn-glass {
  background: rgba(255, 255, 255, 0.2);
  backdrop-filter: blur(10px);
  border: 1px solid rgba(255, 255, 255, 0.3);
  color: white;
  padding: 12px 24px;
  border-radius: 12px;
  font-weight: 500;
  cursor: pointer;
  transition: all 0.3s ease;
}

.btn-glass:hover {
  background: rgba(255, 255, 255, 0.3);
  transform: translateY(-1px);
}"#,
        js: r#"// Add ripple effect
document.querySelector('.btn-glass').addEventListener('click', function(e) {
  const ripple = document.createElement('span');
  const rect = this.getBoundingClientRect();
  const size = Math.max(rect.width, rect.height);
  
  ripple.style.width = ripple.style.height = size + 'px';
  ripple.style.left = (e.clientX - rect.left - size / 2) + 'px';
  ripple.style.top = (e.clientY - rect.top - size / 2) + 'px';
  ripple.classList.add('ripple');
  
  this.appendChild(ripple);
  setTimeout(() => ripple.remove(), 600);
});"#,
        tags: &["glass", "glassmorphism", "modern"],
    },
    SeedComponent {
        category: "Buttons",
        name: "Neon Button",
        description: "Cyberpunk neon glow button",
        html: r#"<button class="btn-neon">NEON</button>"#,
        css: r#".btn-neon {
  background: transparent;
  border: 2px solid #00ffff;
  color: #00ffff;
  padding: 12px 24px;
  border-radius: 4px;
  font-weight: bold;
  font-family: 'Courier New', monospace;
  cursor: pointer;
  position: relative;
  text-transform: uppercase;
  letter-spacing: 2px;
  transition: all 0.3s ease;
  box-shadow: 0 0 10px #00ffff;
}

.btn-neon:hover {
  background: #00ffff;
  color: #000;
  box-shadow: 0 0 20px #00ffff, 0 0 40px #00ffff;
  text-shadow: 0 0 5px #000;
}"#,
        js: r#"document.querySelector('.btn-neon').addEventListener('mouseenter', function() {
  this.style.animation = 'neonPulse 0.5s infinite alternate';
});

document.querySelector('.btn-neon').addEventListener('mouseleave', function() {
  this.style.animation = '';
});"#,
        tags: &["neon", "cyberpunk", "glow"],
    },
    SeedComponent {
        category: "Headings",
        name: "Gradient Title",
        description: "Eye-catching gradient headline",
        html: r#"<h1 class="gradient-title">Amazing Title</h1>"#,
        css: r#".gradient-title {
  font-size: 3rem;
  font-weight: bold;
  background: linear-gradient(45deg, #ff6b6b, #4ecdc4, #45b7d1);
  background-size: 300%;
  background-clip: text;
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
  animation: gradientShift 3s ease-in-out infinite;
}

@keyframes gradientShift {
  0%, 100% { background-position: 0% 50%; }
  50% { background-position: 100% 50%; }
}"#,
        js: r#"// Add typing effect
const title = document.querySelector('.gradient-title');
const text = title.textContent;
title.textContent = '';

let i = 0;
function typeWriter() {
  if (i < text.length) {
    title.textContent += text.charAt(i);
    i++;
    setTimeout(typeWriter, 100);
  }
}
typeWriter();"#,
        tags: &["gradient", "animation", "typing"],
    },
];

pub const NAVIGATION_COMPONENTS: &[SeedComponent] = &[
    SeedComponent {
        category: NAVIGATION_CATEGORY,
        name: "Sticky Top Navigation",
        description: "Fixed navigation bar that stays at the top",
        html: r##"<nav class="sticky-nav">
  <div class="nav-container">
    <div class="nav-logo">
      <a href="#" class="logo">BrandName</a>
    </div>
    <ul class="nav-menu">
      <li><a href="#home" class="nav-link active">Home</a></li>
      <li><a href="#about" class="nav-link">About</a></li>
      <li><a href="#services" class="nav-link">Services</a></li>
      <li><a href="#contact" class="nav-link">Contact</a></li>
    </ul>
    <div class="nav-toggle">
      <span class="bar"></span>
      <span class="bar"></span>
      <span class="bar"></span>
    </div>
  </div>
</nav>"##,
        css: r#".sticky-nav {
  position: sticky;
  top: 0;
  z-index: 1000;
  background: rgba(255, 255, 255, 0.95);
  backdrop-filter: blur(10px);
  border-bottom: 1px solid rgba(0, 0, 0, 0.1);
  transition: all 0.3s ease;
}

.nav-container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 1rem 2rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.logo {
  font-size: 1.5rem;
  font-weight: bold;
  color: #333;
  text-decoration: none;
}

.nav-menu {
  display: flex;
  list-style: none;
  margin: 0;
  padding: 0;
  gap: 2rem;
}

.nav-link {
  text-decoration: none;
  color: #333;
  font-weight: 500;
  transition: color 0.3s ease;
  position: relative;
}

.nav-link:hover,
.nav-link.active {
  color: #007bff;
}

.nav-link::after {
  content: '';
  position: absolute;
  width: 0;
  height: 2px;
  bottom: -5px;
  left: 0;
  background-color: #007bff;
  transition: width 0.3s ease;
}

.nav-link:hover::after,
.nav-link.active::after {
  width: 100%;
}

.nav-toggle {
  display: none;
  flex-direction: column;
  cursor: pointer;
}

.bar {
  width: 25px;
  height: 3px;
  background-color: #333;
  margin: 3px 0;
  transition: 0.3s;
}

@media (max-width: 768px) {
  .nav-menu {
    position: fixed;
    left: -100%;
    top: 70px;
    flex-direction: column;
    background-color: white;
    width: 100%;
    text-align: center;
    transition: 0.3s;
    box-shadow: 0 10px 27px rgba(0, 0, 0, 0.05);
    padding: 2rem 0;
  }

  .nav-menu.active {
    left: 0;
  }

  .nav-toggle {
    display: flex;
  }
}"#,
        js: r#"// Mobile menu toggle
const navToggle = document.querySelector('.nav-toggle');
const navMenu = document.querySelector('.nav-menu');

navToggle.addEventListener('click', () => {
  navMenu.classList.toggle('active');
  
  // Animate hamburger
  const bars = navToggle.querySelectorAll('.bar');
  bars[0].style.transform = navMenu.classList.contains('active') ? 'rotate(-45deg) translate(-5px, 6px)' : '';
  bars[1].style.opacity = navMenu.classList.contains('active') ? '0' : '';
  bars[2].style.transform = navMenu.classList.contains('active') ? 'rotate(45deg) translate(-5px, -6px)' : '';
});

// Close menu when clicking links
document.querySelectorAll('.nav-link').forEach(link => {
  link.addEventListener('click', () => {
    navMenu.classList.remove('active');
    const bars = navToggle.querySelectorAll('.bar');
    bars.forEach(bar => bar.style.transform = '');
    bars[1].style.opacity = '';
  });
});

// Add scroll effect
window.addEventListener('scroll', () => {
  const nav = document.querySelector('.sticky-nav');
  if (window.scrollY > 100) {
    nav.style.background = 'rgba(255, 255, 255, 0.98)';
    nav.style.boxShadow = '0 2px 20px rgba(0, 0, 0, 0.1)';
  } else {
    nav.style.background = 'rgba(255, 255, 255, 0.95)';
    nav.style.boxShadow = 'none';
  }
});"#,
        tags: &["sticky", "responsive", "mobile", "top"],
    },
    SeedComponent {
        category: NAVIGATION_CATEGORY,
        name: "Modern Navigation Bar",
        description: "Clean modern navigation with hover effects",
        html: r##"<nav class="modern-nav">
  <div class="nav-wrapper">
    <div class="nav-brand">
      <h2>Modern</h2>
    </div>
    <ul class="nav-items">
      <li><a href="#" class="nav-item">Home</a></li>
      <li><a href="#" class="nav-item">Products</a></li>
      <li><a href="#" class="nav-item">About</a></li>
      <li><a href="#" class="nav-item">Contact</a></li>
    </ul>
    <div class="nav-actions">
      <button class="btn-outline">Login</button>
      <button class="btn-primary">Sign Up</button>
    </div>
  </div>
</nav>"##,
        css: r#".modern-nav {
  background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
  padding: 1rem 0;
  position: sticky;
  top: 0;
  z-index: 1000;
}

.nav-wrapper {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 2rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.nav-brand h2 {
  color: white;
  margin: 0;
  font-size: 1.8rem;
  font-weight: 700;
}

.nav-items {
  display: flex;
  list-style: none;
  margin: 0;
  padding: 0;
  gap: 2rem;
}

.nav-item {
  color: white;
  text-decoration: none;
  font-weight: 500;
  padding: 0.5rem 1rem;
  border-radius: 8px;
  transition: all 0.3s ease;
}

.nav-item:hover {
  background: rgba(255, 255, 255, 0.2);
  transform: translateY(-2px);
}

.nav-actions {
  display: flex;
  gap: 1rem;
}

.btn-outline {
  background: transparent;
  border: 2px solid white;
  color: white;
  padding: 0.5rem 1.5rem;
  border-radius: 25px;
  font-weight: 500;
  cursor: pointer;
  transition: all 0.3s ease;
}

.btn-outline:hover {
  background: white;
  color: #667eea;
}

.btn-primary {
  background: white;
  border: none;
  color: #667eea;
  padding: 0.5rem 1.5rem;
  border-radius: 25px;
  font-weight: 600;
  cursor: pointer;
  transition: all 0.3s ease;
}

.btn-primary:hover {
  transform: translateY(-2px);
  box-shadow: 0 5px 15px rgba(0, 0, 0, 0.2);
}

@media (max-width: 768px) {
  .nav-items {
    display: none;
  }
  
  .nav-actions {
    gap: 0.5rem;
  }
  
  .btn-outline,
  .btn-primary {
    padding: 0.4rem 1rem;
    font-size: 0.9rem;
  }
}"#,
        js: r#"// Add smooth scroll for navigation links
document.querySelectorAll('.nav-item').forEach(link => {
  link.addEventListener('click', function(e) {
    e.preventDefault();
    
    // Remove active class from all links
    document.querySelectorAll('.nav-item').forEach(item => {
      item.classList.remove('active');
    });
    
    // Add active class to clicked link
    this.classList.add('active');
    
    // Add pulse effect
    this.style.animation = 'pulse 0.3s ease';
    setTimeout(() => {
      this.style.animation = '';
    }, 300);
  });
});

// Add CSS for active state and pulse animation
const style = document.createElement('style');
style.textContent = \"#,
        tags: &["modern", "gradient", "buttons", "responsive"],
    },
    SeedComponent {
        category: NAVIGATION_CATEGORY,
        name: "Sidebar Navigation",
        description: "Collapsible sidebar navigation menu",
        html: r##"<div class="sidebar-nav">
  <div class="sidebar-toggle">
    <button class="toggle-btn">☰</button>
  </div>
  <nav class="sidebar">
    <div class="sidebar-header">
      <h3>Menu</h3>
    </div>
    <ul class="sidebar-menu">
      <li><a href="#" class="sidebar-link"><span class="icon">🏠</span> Dashboard</a></li>
      <li><a href="#" class="sidebar-link"><span class="icon">👥</span> Users</a></li>
      <li><a href="#" class="sidebar-link"><span class="icon">📊</span> Analytics</a></li>
      <li><a href="#" class="sidebar-link"><span class="icon">⚙️</span> Settings</a></li>
      <li><a href="#" class="sidebar-link"><span class="icon">💬</span> Messages</a></li>
      <li><a href="#" class="sidebar-link"><span class="icon">🚪</span> Logout</a></li>
    </ul>
  </nav>
  <div class="content-area">
    <h2>Main Content Area</h2>
    <p>This area shows how the sidebar navigation works with your main content.</p>
  </div>
</div>"##,
        css: r#".sidebar-nav {
  display: flex;
  min-height: 400px;
  position: relative;
}

.sidebar-toggle {
  position: absolute;
  top: 1rem;
  left: 1rem;
  z-index: 1001;
}

.toggle-btn {
  background: #333;
  color: white;
  border: none;
  padding: 0.5rem;
  border-radius: 4px;
  cursor: pointer;
  font-size: 1.2rem;
}

.sidebar {
  width: 250px;
  background: #2c3e50;
  color: white;
  transition: transform 0.3s ease;
  position: fixed;
  left: 0;
  top: 0;
  height: 100vh;
  z-index: 1000;
  transform: translateX(-100%);
}

.sidebar.active {
  transform: translateX(0);
}

.sidebar-header {
  padding: 2rem 1rem 1rem;
  border-bottom: 1px solid #34495e;
}

.sidebar-header h3 {
  margin: 0;
  font-size: 1.5rem;
}

.sidebar-menu {
  list-style: none;
  padding: 0;
  margin: 0;
}

.sidebar-link {
  display: flex;
  align-items: center;
  padding: 1rem 1.5rem;
  color: white;
  text-decoration: none;
  transition: background 0.3s ease;
  border-bottom: 1px solid #34495e;
}

.sidebar-link:hover {
  background: #34495e;
}

.sidebar-link .icon {
  margin-right: 1rem;
  font-size: 1.2rem;
}

.content-area {
  flex: 1;
  padding: 4rem 2rem 2rem;
  margin-left: 0;
  transition: margin-left 0.3s ease;
}

.sidebar.active ~ .content-area {
  margin-left: 250px;
}

@media (max-width: 768px) {
  .sidebar.active ~ .content-area {
    margin-left: 0;
  }
}"#,
        js: r#"// Sidebar toggle functionality
const toggleBtn = document.querySelector('.toggle-btn');
const sidebar = document.querySelector('.sidebar');

toggleBtn.addEventListener('click', () => {
  sidebar.classList.toggle('active');
  
  // Change toggle button text
  toggleBtn.textContent = sidebar.classList.contains('active') ? '✕' : '☰';
});

// Close sidebar when clicking outside on mobile
document.addEventListener('click', (e) => {
  if (window.innerWidth <= 768) {
    if (!sidebar.contains(e.target) && !toggleBtn.contains(e.target)) {
      sidebar.classList.remove('active');
      toggleBtn.textContent = '☰';
    }
  }
});

// Add active state to menu items
document.querySelectorAll('.sidebar-link').forEach(link => {
  link.addEventListener('click', function(e) {
    e.preventDefault();
    
    // Remove active class from all links
    document.querySelectorAll('.sidebar-link').forEach(item => {
      item.classList.remove('active');
    });
    
    // Add active class to clicked link
    this.classList.add('active');
  });
});

// Add CSS for active state
const style = document.createElement('style');
style.textContent = \"#,
        tags: &["sidebar", "collapsible", "mobile", "dashboard"],
    },
];

/// Outcome of [`seed_if_empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedReport {
    /// The store already had categories; nothing was written.
    AlreadySeeded,
    Seeded { categories: usize, components: usize },
}

/// Outcome of [`add_navigation_components`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationReport {
    CategoryMissing,
    Added { category_id: DbId, components: usize },
}

/// Insert the default categories and demo components when the store has no
/// categories yet.
///
/// Components go through [`CatalogStore::create_component`], so category
/// counts come out right without a separate fix-up pass.
pub async fn seed_if_empty(store: &dyn CatalogStore) -> StoreResult<SeedReport> {
    if !store.categories().await?.is_empty() {
        tracing::info!("Catalog already seeded, skipping");
        return Ok(SeedReport::AlreadySeeded);
    }

    let mut ids: HashMap<&'static str, DbId> = HashMap::new();
    for seed in DEFAULT_CATEGORIES {
        let category = store.create_category(&seed.to_create()).await?;
        ids.insert(seed.name, category.id);
    }
    tracing::info!(count = ids.len(), "Created default categories");

    let mut components = 0;
    for seed in DEMO_COMPONENTS {
        let Some(&category_id) = ids.get(seed.category) else {
            continue;
        };
        store.create_component(&seed.to_create(category_id)).await?;
        components += 1;
    }
    tracing::info!(count = components, "Created demo components");

    Ok(SeedReport::Seeded {
        categories: ids.len(),
        components,
    })
}

/// Attach the navigation pack to the category named [`NAVIGATION_CATEGORY`].
///
/// Not idempotent: running it twice inserts the pack twice.
pub async fn add_navigation_components(store: &dyn CatalogStore) -> StoreResult<NavigationReport> {
    let category = store
        .categories()
        .await?
        .into_iter()
        .find(|c| c.name == NAVIGATION_CATEGORY);

    let Some(category) = category else {
        tracing::warn!(category = NAVIGATION_CATEGORY, "Category not found, nothing added");
        return Ok(NavigationReport::CategoryMissing);
    };

    for seed in NAVIGATION_COMPONENTS {
        store.create_component(&seed.to_create(category.id)).await?;
    }
    tracing::info!(
        category_id = category.id,
        count = NAVIGATION_COMPONENTS.len(),
        "Added navigation components",
    );

    Ok(NavigationReport::Added {
        category_id: category.id,
        components: NAVIGATION_COMPONENTS.len(),
    })
}
