//! Handler dispatch (§4.4): one function per [`HandlerId`] variant,
//! resolved through a closed `match` rather than dynamic dispatch by
//! symbolic name (§9 "Dynamic dispatch on handler names").

mod arrow_handlers;
mod date_handlers;
mod narrow_handlers;
mod repeater_handlers;
mod time;
mod util;

use crate::grammar::pattern::HandlerId;
use crate::options::Options;
use crate::token::Token;
use crate::types::Span;

pub fn dispatch(id: HandlerId, tokens: &[Token], options: &Options) -> Option<Span> {
    match id {
        HandlerId::R => repeater_handlers::handle_r(tokens, options),
        HandlerId::RGR => repeater_handlers::handle_r_g_r(tokens, options),
        HandlerId::SRP => arrow_handlers::handle_s_r_p(tokens, options),
        HandlerId::PSR => arrow_handlers::handle_p_s_r(tokens, options),
        HandlerId::SRPA => arrow_handlers::handle_s_r_p_a(tokens, options),
        HandlerId::ORSR => narrow_handlers::handle_o_r_s_r(tokens, options),
        HandlerId::ORGR => narrow_handlers::handle_o_r_g_r(tokens, options),
        HandlerId::DateMonthNameDayYear => date_handlers::handle_month_name_day_year(tokens, options),
        HandlerId::DateDayMonthNameYear => date_handlers::handle_day_month_name_year(tokens, options),
        HandlerId::DateIsoYearMonthDay => date_handlers::handle_iso_year_month_day(tokens, options),
        HandlerId::DateMdySlash => date_handlers::handle_mdy_slash(tokens, options),
        HandlerId::DateDmySlash => date_handlers::handle_dmy_slash(tokens, options),
    }
}
